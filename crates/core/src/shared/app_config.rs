use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotation::domain::annotation_style::AnnotationStyle;
use crate::detection::domain::detection_params::DetectionParams;
use crate::preprocessing::domain::preprocess_params::PreprocessParams;
use crate::shared::constants::{
    DEFAULT_CAMERA_INDEX, ESC_KEY_CODE, FRONTAL_FACE_CASCADE, WINDOW_TITLE,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scale factor must be greater than 1.0, got {0}")]
    ScaleFactor(f64),
    #[error("min neighbors must be >= 0, got {0}")]
    MinNeighbors(i32),
    #[error("min size must be at least 1x1, got {0}x{1}")]
    MinSize(i32, i32),
    #[error("max size {}x{} is smaller than min size {}x{}", .max.0, .max.1, .min.0, .min.1)]
    MaxSize { max: (i32, i32), min: (i32, i32) },
    #[error("clip limit must be a finite value >= 0, got {0}")]
    ClipLimit(f64),
    #[error("tile grid must be at least 1x1, got {0}x{1}")]
    TileGrid(u32, u32),
    #[error("annotation thickness must be between 1 and 32767, got {0}")]
    Thickness(u32),
    #[error("camera index must be >= 0, got {0}")]
    CameraIndex(i32),
    #[error("window title must not be empty")]
    EmptyWindowTitle,
}

/// Everything the detection loop needs, with the values of the classic
/// frontal-face setup as defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Classifier data files, loaded and applied in this order.
    pub classifiers: Vec<PathBuf>,
    pub window_title: String,
    pub camera_index: i32,
    /// Video or image file to read instead of the camera.
    pub input: Option<PathBuf>,
    /// Key code that ends the loop when polled after a frame is shown.
    pub exit_key: i32,
    pub detection: DetectionParams,
    pub preprocessing: PreprocessParams,
    pub annotation: AnnotationStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            classifiers: vec![PathBuf::from(FRONTAL_FACE_CASCADE)],
            window_title: WINDOW_TITLE.to_string(),
            camera_index: DEFAULT_CAMERA_INDEX,
            input: None,
            exit_key: ESC_KEY_CODE,
            detection: DetectionParams::default(),
            preprocessing: PreprocessParams::default(),
            annotation: AnnotationStyle::default(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks numeric ranges. An empty classifier list is left to
    /// initialization, which reports it as its own failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_title.trim().is_empty() {
            return Err(ConfigError::EmptyWindowTitle);
        }
        if self.camera_index < 0 {
            return Err(ConfigError::CameraIndex(self.camera_index));
        }
        self.detection.validate()?;
        self.preprocessing.validate()?;
        self.annotation.validate()
    }
}
