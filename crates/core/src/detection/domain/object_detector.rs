use crate::shared::gray_frame::GrayFrame;
use crate::shared::region::Region;

/// Domain interface for a single loaded detection model.
///
/// Detectors hold native state that may be mutated during a scan,
/// hence `&mut self`.
pub trait ObjectDetector {
    /// The dataset file the model was built from, used in logs and errors.
    fn name(&self) -> &str;

    fn detect(&mut self, image: &GrayFrame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
