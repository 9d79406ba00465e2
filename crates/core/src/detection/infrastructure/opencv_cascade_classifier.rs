use std::path::Path;

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::{self, CascadeClassifier};
use opencv::prelude::*;

use crate::detection::domain::detection_params::DetectionParams;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::shared::gray_frame::GrayFrame;
use crate::shared::opencv_mat::with_gray_mat;
use crate::shared::region::Region;

/// Haar/LBP cascade loaded from an OpenCV XML data file.
pub struct OpenCvCascadeClassifier {
    name: String,
    classifier: CascadeClassifier,
    params: DetectionParams,
    objects: Vector<Rect>,
}

impl OpenCvCascadeClassifier {
    pub fn load(path: &Path, params: DetectionParams) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("classifier path is not valid UTF-8: {}", path.display()))?;
        let classifier = CascadeClassifier::new(path_str)?;
        if classifier.empty()? {
            return Err(format!("failed to load cascade data from {}", path.display()).into());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            classifier,
            params,
            objects: Vector::new(),
        })
    }

    fn flags(&self) -> i32 {
        if self.params.scale_image {
            objdetect::CASCADE_SCALE_IMAGE
        } else {
            0
        }
    }
}

impl ObjectDetector for OpenCvCascadeClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(&mut self, image: &GrayFrame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let (min_w, min_h) = self.params.min_size;
        let max_size = self
            .params
            .max_size
            .map(|(w, h)| Size::new(w, h))
            .unwrap_or_default();
        let flags = self.flags();

        self.objects.clear();
        let Self {
            classifier,
            params,
            objects,
            ..
        } = &mut *self;
        with_gray_mat(image, |mat| {
            classifier.detect_multi_scale(
                mat,
                objects,
                params.scale_factor,
                params.min_neighbors,
                flags,
                Size::new(min_w, min_h),
                max_size,
            )
        })?;

        Ok(self
            .objects
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}
