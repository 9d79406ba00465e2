use serde::{Deserialize, Serialize};

use crate::shared::app_config::ConfigError;
use crate::shared::constants::{DEFAULT_MIN_NEIGHBORS, DEFAULT_MIN_SIZE, DEFAULT_SCALE_FACTOR};

/// Multi-scale sliding-window parameters shared by every classifier in a set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionParams {
    /// Pyramid step between scans; must be greater than 1.
    pub scale_factor: f64,
    /// Overlapping hits required before a candidate is reported.
    pub min_neighbors: i32,
    /// Smallest object size considered, `(width, height)` in pixels.
    pub min_size: (i32, i32),
    /// Largest object size considered; `None` scans up to the frame size.
    pub max_size: Option<(i32, i32)>,
    /// Scale the image instead of the classifier features between scans.
    pub scale_image: bool,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            min_size: DEFAULT_MIN_SIZE,
            max_size: None,
            scale_image: true,
        }
    }
}

impl DetectionParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 1.0 {
            return Err(ConfigError::ScaleFactor(self.scale_factor));
        }
        if self.min_neighbors < 0 {
            return Err(ConfigError::MinNeighbors(self.min_neighbors));
        }
        let (min_w, min_h) = self.min_size;
        if min_w < 1 || min_h < 1 {
            return Err(ConfigError::MinSize(min_w, min_h));
        }
        if let Some((max_w, max_h)) = self.max_size {
            if max_w < min_w || max_h < min_h {
                return Err(ConfigError::MaxSize {
                    max: (max_w, max_h),
                    min: self.min_size,
                });
            }
        }
        Ok(())
    }
}
