use opencv::core::{Rect, Scalar};
use opencv::imgproc;

use crate::annotation::domain::annotation_style::AnnotationStyle;
use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::shared::constants::MAX_ANNOTATION_THICKNESS;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::edit_frame_mat;
use crate::shared::region::Region;

/// Outlines each region with `imgproc::rectangle`.
///
/// A region covers `(x, y)` through `(x + width - 1, y + height - 1)`.
/// OpenCV clips whatever falls outside the frame. Regions with no area are
/// skipped.
pub struct RectangleAnnotator {
    color: Scalar,
    thickness: i32,
}

impl RectangleAnnotator {
    pub fn new(style: &AnnotationStyle) -> Self {
        let [b, g, r] = style.color;
        Self {
            color: Scalar::new(f64::from(b), f64::from(g), f64::from(r), 0.0),
            thickness: style.thickness.clamp(1, MAX_ANNOTATION_THICKNESS) as i32,
        }
    }
}

impl Default for RectangleAnnotator {
    fn default() -> Self {
        Self::new(&AnnotationStyle::default())
    }
}

impl FrameAnnotator for RectangleAnnotator {
    fn annotate(&self, frame: &mut Frame, regions: &[Region]) -> Result<(), Box<dyn std::error::Error>> {
        if regions.is_empty() {
            return Ok(());
        }
        edit_frame_mat(frame, |mat| {
            for region in regions.iter().filter(|r| !r.is_empty()) {
                let rect = Rect::new(region.x, region.y, region.width, region.height);
                imgproc::rectangle(mat, rect, self.color, self.thickness, imgproc::LINE_8, 0)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}
