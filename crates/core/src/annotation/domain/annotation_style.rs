use serde::{Deserialize, Serialize};

use crate::shared::app_config::ConfigError;
use crate::shared::constants::{ANNOTATION_GREEN, MAX_ANNOTATION_THICKNESS};

/// How detection outlines are drawn onto the color frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Outline color in BGR order.
    pub color: [u8; 3],
    /// Outline thickness in pixels, centered on the region edge.
    pub thickness: u32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: ANNOTATION_GREEN,
            thickness: 1,
        }
    }
}

impl AnnotationStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thickness == 0 || self.thickness > MAX_ANNOTATION_THICKNESS {
            return Err(ConfigError::Thickness(self.thickness));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_pixel_green() {
        let style = AnnotationStyle::default();
        assert_eq!(style.color, [0, 255, 0]);
        assert_eq!(style.thickness, 1);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_zero_thickness_rejected() {
        let style = AnnotationStyle {
            thickness: 0,
            ..Default::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_thickness_above_drawing_limit_rejected() {
        let style = AnnotationStyle {
            thickness: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(style.validate(), Err(ConfigError::Thickness(u32::MAX))));

        let widest = AnnotationStyle {
            thickness: MAX_ANNOTATION_THICKNESS,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
    }
}
