use std::fmt;
use std::path::{Path, PathBuf};

use crate::annotation::domain::annotation_style::AnnotationStyle;
use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::capture::domain::frame_source::FrameSource;
use crate::detection::domain::detection_params::DetectionParams;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::preprocessing::domain::frame_preprocessor::FramePreprocessor;
use crate::preprocessing::domain::preprocess_params::PreprocessParams;

/// Where frames come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSpec {
    Camera(i32),
    /// A video or still image on disk.
    File(PathBuf),
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera(index) => write!(f, "camera {index}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Factory for the collaborators a session needs.
///
/// Initialization builds the preprocessor and annotator first, then opens
/// the display, classifiers and source in that order, and stops at the
/// first failure.
pub trait Backend {
    fn preprocessor(
        &self,
        params: &PreprocessParams,
    ) -> Result<Box<dyn FramePreprocessor>, Box<dyn std::error::Error>>;

    fn annotator(
        &self,
        style: &AnnotationStyle,
    ) -> Result<Box<dyn FrameAnnotator>, Box<dyn std::error::Error>>;

    fn open_display(&self, title: &str) -> Result<Box<dyn FrameDisplay>, Box<dyn std::error::Error>>;

    fn load_classifier(
        &self,
        path: &Path,
        params: &DetectionParams,
    ) -> Result<Box<dyn ObjectDetector>, Box<dyn std::error::Error>>;

    fn open_source(
        &self,
        spec: &SourceSpec,
    ) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>>;
}
