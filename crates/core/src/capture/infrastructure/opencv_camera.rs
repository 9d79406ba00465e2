use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::mat_to_frame;
use crate::shared::video_metadata::VideoMetadata;

/// A system camera opened through OpenCV's default capture backend.
pub struct OpenCvCamera {
    capture: VideoCapture,
    buffer: Mat,
    metadata: VideoMetadata,
    frame_index: usize,
}

impl OpenCvCamera {
    pub fn open(index: i32) -> Result<Self, Box<dyn std::error::Error>> {
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("failed to open camera {index}").into());
        }

        let metadata = VideoMetadata {
            width: capture.get(videoio::CAP_PROP_FRAME_WIDTH)?.max(0.0) as u32,
            height: capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?.max(0.0) as u32,
            fps: capture.get(videoio::CAP_PROP_FPS)?.max(0.0),
            total_frames: None,
            description: format!("camera {index} ({})", capture.get_backend_name()?),
        };

        Ok(Self {
            capture,
            buffer: Mat::default(),
            metadata,
            frame_index: 0,
        })
    }
}

impl FrameSource for OpenCvCamera {
    fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    fn read(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        if !self.capture.read(&mut self.buffer)? || self.buffer.empty() {
            return Ok(None);
        }
        let frame = mat_to_frame(&self.buffer, self.frame_index)?;
        self.frame_index += 1;
        Ok(Some(frame))
    }
}
