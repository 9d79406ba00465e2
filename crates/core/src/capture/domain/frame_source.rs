use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Pulls frames one at a time from a camera, video file or image.
///
/// `read` blocks until a frame is available. `Ok(None)` is the normal end of
/// the stream (a failed or empty read); `Err` is a collaborator failure that
/// aborts the run.
pub trait FrameSource {
    fn metadata(&self) -> &VideoMetadata;

    fn read(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;
}
