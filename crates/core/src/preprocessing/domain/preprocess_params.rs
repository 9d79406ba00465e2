use serde::{Deserialize, Serialize};

use crate::shared::app_config::ConfigError;
use crate::shared::constants::{DEFAULT_CLIP_LIMIT, DEFAULT_TILE_GRID};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessParams {
    /// Run global histogram equalization before CLAHE.
    pub equalize_histogram: bool,
    /// CLAHE contrast limit; 0 disables clipping.
    pub clip_limit: f64,
    /// CLAHE tile grid as `(columns, rows)`.
    pub tile_grid: (u32, u32),
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            equalize_histogram: true,
            clip_limit: DEFAULT_CLIP_LIMIT,
            tile_grid: DEFAULT_TILE_GRID,
        }
    }
}

impl PreprocessParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.clip_limit.is_finite() || self.clip_limit < 0.0 {
            return Err(ConfigError::ClipLimit(self.clip_limit));
        }
        let (cols, rows) = self.tile_grid;
        if cols == 0 || rows == 0 {
            return Err(ConfigError::TileGrid(cols, rows));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = PreprocessParams::default();
        assert!(params.equalize_histogram);
        assert_eq!(params.clip_limit, 2.0);
        assert_eq!(params.tile_grid, (8, 8));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_clip_limit() {
        let params = PreprocessParams {
            clip_limit: -0.5,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::ClipLimit(_))));
    }

    #[test]
    fn test_rejects_empty_tile_grid() {
        let params = PreprocessParams {
            tile_grid: (8, 0),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::TileGrid(8, 0))));
    }
}
