use std::path::Path;

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Adapts a single image file to the [`FrameSource`] interface.
///
/// Yields the decoded image once, then reports end of stream, so a still
/// image runs through the same loop as a camera.
pub struct ImageFileSource {
    frame: Option<Frame>,
    metadata: VideoMetadata,
}

impl ImageFileSource {
    pub fn open(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let mut data = rgb.into_raw();
        for px in data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        let frame = Frame::new(data, width, height, 3, 0);

        let metadata = VideoMetadata {
            width,
            height,
            fps: 0.0,
            total_frames: Some(1),
            description: path.display().to_string(),
        };
        Ok(Self {
            frame: Some(frame),
            metadata,
        })
    }
}

impl FrameSource for ImageFileSource {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        Ok(self.frame.take())
    }
}
