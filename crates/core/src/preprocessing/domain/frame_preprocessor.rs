use crate::shared::frame::Frame;
use crate::shared::gray_frame::GrayFrame;

/// Turns a captured color frame into the single-channel image classifiers
/// scan. The output depends only on the frame passed in.
pub trait FramePreprocessor {
    fn preprocess(&mut self, frame: &Frame) -> Result<GrayFrame, Box<dyn std::error::Error>>;
}
