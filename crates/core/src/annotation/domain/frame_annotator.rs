use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws detection results onto the color frame in place.
pub trait FrameAnnotator {
    fn annotate(&self, frame: &mut Frame, regions: &[Region]) -> Result<(), Box<dyn std::error::Error>>;
}
