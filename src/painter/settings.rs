//! Painter settings shared by the brush, randomizer and body tools.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_PREFAB_PATH, MIN_BRUSH_SIZE};

/// Reasons a settings combination cannot be used for painting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Brush size must be a finite number of at least {min} (got {size})")]
    BrushTooSmall { size: f32, min: f32 },

    #[error("Random scale minimum {min} is greater than maximum {max}")]
    InvertedScaleRange { min: f32, max: f32 },

    #[error("Random scale bounds must be positive (got {min}..{max})")]
    NonPositiveScale { min: f32, max: f32 },

    #[error("Body mass must be positive (got {0})")]
    NonPositiveMass(f32),
}

/// Everything the user can tweak about painting. Persisted in the config file.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterSettings {
    /// Diameter of the brush in world units
    pub brush_size: f32,
    /// Asset path of the glTF prefab to instantiate
    pub prefab_path: String,
    /// Added to the brush hit point before placing
    pub position_offset: Vec3,
    pub random_rotation: bool,
    pub random_scale: bool,
    pub random_scale_min: f32,
    pub random_scale_max: f32,
    /// Mass given to bodies added with "Add Bodies"
    pub body_mass: f32,
    pub body_use_gravity: bool,
}

impl Default for PainterSettings {
    fn default() -> Self {
        Self {
            brush_size: 2.0,
            prefab_path: DEFAULT_PREFAB_PATH.to_string(),
            position_offset: Vec3::ZERO,
            random_rotation: false,
            random_scale: false,
            random_scale_min: 0.5,
            random_scale_max: 1.5,
            body_mass: 1.0,
            body_use_gravity: true,
        }
    }
}

impl PainterSettings {
    /// Radius of the brush circle drawn on the surface
    pub fn brush_radius(&self) -> f32 {
        self.brush_size / 2.0
    }

    /// Distance within which an existing instance blocks a new one.
    ///
    /// This is the full brush size, not the drawn radius.
    pub fn exclusion_radius(&self) -> f32 {
        self.brush_size
    }

    /// Check the settings before they are used for placement.
    ///
    /// Scale bounds are only checked while random scale is enabled.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.brush_size.is_finite() || self.brush_size < MIN_BRUSH_SIZE {
            return Err(SettingsError::BrushTooSmall {
                size: self.brush_size,
                min: MIN_BRUSH_SIZE,
            });
        }

        if self.random_scale {
            let (min, max) = (self.random_scale_min, self.random_scale_max);
            if min <= 0.0 || max <= 0.0 {
                return Err(SettingsError::NonPositiveScale { min, max });
            }
            if min > max {
                return Err(SettingsError::InvertedScaleRange { min, max });
            }
        }

        if self.body_mass <= 0.0 || !self.body_mass.is_finite() {
            return Err(SettingsError::NonPositiveMass(self.body_mass));
        }

        Ok(())
    }

    /// Grow or shrink the brush, never below the minimum size
    pub fn adjust_brush_size(&mut self, delta: f32) {
        self.brush_size = (self.brush_size + delta).max(MIN_BRUSH_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = PainterSettings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.brush_size, 2.0);
        assert!(!settings.random_scale);
        assert_eq!(settings.brush_radius(), 1.0);
        assert_eq!(settings.exclusion_radius(), 2.0);
    }

    #[test]
    fn test_small_brush_rejected() {
        let settings = PainterSettings {
            brush_size: 0.0,
            ..default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::BrushTooSmall { .. })
        ));

        let settings = PainterSettings {
            brush_size: f32::NAN,
            ..default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_inverted_scale_range_rejected_only_when_enabled() {
        let mut settings = PainterSettings {
            random_scale_min: 2.0,
            random_scale_max: 1.0,
            ..default()
        };
        // Bounds are ignored while random scale is off
        assert_eq!(settings.validate(), Ok(()));

        settings.random_scale = true;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvertedScaleRange { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        let settings = PainterSettings {
            random_scale: true,
            random_scale_min: 0.0,
            random_scale_max: 1.0,
            ..default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositiveScale { .. })
        ));
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let settings = PainterSettings {
            body_mass: -1.0,
            ..default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::NonPositiveMass(-1.0)));
    }

    #[test]
    fn test_adjust_brush_size_clamps_at_minimum() {
        let mut settings = PainterSettings::default();
        settings.adjust_brush_size(1.0);
        assert_eq!(settings.brush_size, 3.0);

        settings.adjust_brush_size(-1.0);
        settings.adjust_brush_size(-1.0);
        settings.adjust_brush_size(-1.0);
        assert_eq!(settings.brush_size, MIN_BRUSH_SIZE);
    }

    #[test]
    fn test_error_messages() {
        let err = SettingsError::InvertedScaleRange { min: 2.0, max: 1.0 };
        assert_eq!(
            err.to_string(),
            "Random scale minimum 2 is greater than maximum 1"
        );
    }

    #[test]
    fn test_settings_serialization() {
        let settings = PainterSettings {
            brush_size: 5.0,
            prefab_path: "models/rock.glb".to_string(),
            position_offset: Vec3::new(0.0, 0.5, 0.0),
            random_rotation: true,
            ..default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: PainterSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: PainterSettings = serde_json::from_str(r#"{"brush_size": 4.0}"#).unwrap();
        assert_eq!(parsed.brush_size, 4.0);
        assert_eq!(parsed.prefab_path, DEFAULT_PREFAB_PATH);
        assert_eq!(parsed.random_scale_min, 0.5);
    }
}
