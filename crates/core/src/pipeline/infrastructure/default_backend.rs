use std::path::{Path, PathBuf};

use crate::annotation::domain::annotation_style::AnnotationStyle;
use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::capture::domain::frame_source::FrameSource;
use crate::capture::infrastructure::ffmpeg_video_source::FfmpegVideoSource;
use crate::capture::infrastructure::image_file_source::ImageFileSource;
use crate::detection::domain::detection_params::DetectionParams;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::display::infrastructure::headless_display::HeadlessDisplay;
use crate::pipeline::backend::{Backend, SourceSpec};
use crate::preprocessing::domain::frame_preprocessor::FramePreprocessor;
use crate::preprocessing::domain::preprocess_params::PreprocessParams;
use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::model_resolver;

#[cfg(feature = "opencv")]
use crate::annotation::infrastructure::rectangle_annotator::RectangleAnnotator;
#[cfg(feature = "opencv")]
use crate::capture::infrastructure::opencv_camera::OpenCvCamera;
#[cfg(feature = "opencv")]
use crate::detection::infrastructure::opencv_cascade_classifier::OpenCvCascadeClassifier;
#[cfg(feature = "opencv")]
use crate::display::infrastructure::highgui_display::HighGuiDisplay;
#[cfg(feature = "opencv")]
use crate::preprocessing::infrastructure::opencv_preprocessor::OpenCvPreprocessor;

/// Wires the OpenCV, ffmpeg and image adapters.
///
/// Preprocessing, drawing, cameras, windows and cascade classifiers need the
/// `opencv` feature. Without it those calls return an error naming the
/// missing feature.
#[derive(Clone, Debug, Default)]
pub struct DefaultBackend {
    headless: bool,
    model_dirs: Vec<PathBuf>,
}

impl DefaultBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the window and run until the source ends.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Extra directories searched for classifier files by name.
    pub fn model_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.model_dirs = dirs;
        self
    }
}

impl Backend for DefaultBackend {
    fn preprocessor(
        &self,
        params: &PreprocessParams,
    ) -> Result<Box<dyn FramePreprocessor>, Box<dyn std::error::Error>> {
        build_preprocessor(params)
    }

    fn annotator(
        &self,
        style: &AnnotationStyle,
    ) -> Result<Box<dyn FrameAnnotator>, Box<dyn std::error::Error>> {
        build_annotator(style)
    }

    fn open_display(&self, title: &str) -> Result<Box<dyn FrameDisplay>, Box<dyn std::error::Error>> {
        if self.headless {
            log::info!("Running headless");
            return Ok(Box::new(HeadlessDisplay::new()));
        }
        open_window(title)
    }

    fn load_classifier(
        &self,
        path: &Path,
        params: &DetectionParams,
    ) -> Result<Box<dyn ObjectDetector>, Box<dyn std::error::Error>> {
        let resolved = model_resolver::resolve(path, &self.model_dirs)?;
        load_cascade(&resolved, params)
    }

    fn open_source(
        &self,
        spec: &SourceSpec,
    ) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> {
        match spec {
            SourceSpec::Camera(index) => open_camera(*index),
            SourceSpec::File(path) if is_image(path) => Ok(Box::new(ImageFileSource::open(path)?)),
            SourceSpec::File(path) => Ok(Box::new(FfmpegVideoSource::open(path)?)),
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(feature = "opencv")]
fn build_preprocessor(
    params: &PreprocessParams,
) -> Result<Box<dyn FramePreprocessor>, Box<dyn std::error::Error>> {
    Ok(Box::new(OpenCvPreprocessor::new(params)?))
}

#[cfg(not(feature = "opencv"))]
fn build_preprocessor(
    _params: &PreprocessParams,
) -> Result<Box<dyn FramePreprocessor>, Box<dyn std::error::Error>> {
    Err("built without opencv support; preprocessing is unavailable".into())
}

#[cfg(feature = "opencv")]
fn build_annotator(
    style: &AnnotationStyle,
) -> Result<Box<dyn FrameAnnotator>, Box<dyn std::error::Error>> {
    Ok(Box::new(RectangleAnnotator::new(style)))
}

#[cfg(not(feature = "opencv"))]
fn build_annotator(
    _style: &AnnotationStyle,
) -> Result<Box<dyn FrameAnnotator>, Box<dyn std::error::Error>> {
    Err("built without opencv support; drawing is unavailable".into())
}

#[cfg(feature = "opencv")]
fn open_window(title: &str) -> Result<Box<dyn FrameDisplay>, Box<dyn std::error::Error>> {
    Ok(Box::new(HighGuiDisplay::open(title)?))
}

#[cfg(not(feature = "opencv"))]
fn open_window(_title: &str) -> Result<Box<dyn FrameDisplay>, Box<dyn std::error::Error>> {
    Err("built without opencv support; use --headless".into())
}

#[cfg(feature = "opencv")]
fn load_cascade(
    path: &Path,
    params: &DetectionParams,
) -> Result<Box<dyn ObjectDetector>, Box<dyn std::error::Error>> {
    Ok(Box::new(OpenCvCascadeClassifier::load(path, params.clone())?))
}

#[cfg(not(feature = "opencv"))]
fn load_cascade(
    _path: &Path,
    _params: &DetectionParams,
) -> Result<Box<dyn ObjectDetector>, Box<dyn std::error::Error>> {
    Err("built without opencv support; cascade classifiers are unavailable".into())
}

#[cfg(feature = "opencv")]
fn open_camera(index: i32) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> {
    Ok(Box::new(OpenCvCamera::open(index)?))
}

#[cfg(not(feature = "opencv"))]
fn open_camera(_index: i32) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> {
    Err("built without opencv support; use --input".into())
}
