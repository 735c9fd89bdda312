//! Shared configuration for the vertex paint tool
//!
//! This crate is the single source of truth for brush ranges and the brush
//! state a new painting session starts with. Hosts may load it from their
//! own settings files through serde.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Smallest brush radius offered by the size slider
pub const MIN_RADIUS: f32 = 0.0;

/// Largest brush radius offered by the size slider
pub const MAX_RADIUS: f32 = 20.0;

/// Lower bound of the intensity slider (fully subtractive)
pub const MIN_INTENSITY: f32 = -1.0;

/// Upper bound of the intensity slider (fully additive)
pub const MAX_INTENSITY: f32 = 1.0;

/// Radius a fresh session starts with, in world units
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Intensity a fresh session starts with
pub const DEFAULT_INTENSITY: f32 = 0.5;

/// Ranges the brush controls are clamped to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushLimits {
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_intensity: f32,
    pub max_intensity: f32,
}

impl Default for BrushLimits {
    fn default() -> Self {
        Self {
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_intensity: MIN_INTENSITY,
            max_intensity: MAX_INTENSITY,
        }
    }
}

impl BrushLimits {
    /// Clamp a radius into the configured range
    ///
    /// NaN collapses to the minimum so a bad slider value never widens the brush.
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        if radius.is_nan() {
            return self.min_radius;
        }
        radius.clamp(self.min_radius, self.max_radius.max(self.min_radius))
    }

    /// Clamp an intensity into the configured range
    pub fn clamp_intensity(&self, intensity: f32) -> f32 {
        if intensity.is_nan() {
            return 0.0_f32.clamp(self.min_intensity, self.max_intensity.max(self.min_intensity));
        }
        intensity.clamp(self.min_intensity, self.max_intensity.max(self.min_intensity))
    }
}

/// Painter configuration: limits plus the initial brush
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct PainterConfig {
    /// Slider ranges
    pub limits: BrushLimits,
    /// Initial brush radius
    pub default_radius: f32,
    /// Initial brush intensity
    pub default_intensity: f32,
    /// Initial channel as a toolbar index (0 = red, 1 = green, 2 = blue, 3 = alpha)
    pub default_channel: u8,
    /// Whether sessions start with the raw color preview enabled
    pub default_preview_raw: bool,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            limits: BrushLimits::default(),
            default_radius: DEFAULT_RADIUS,
            default_intensity: DEFAULT_INTENSITY,
            default_channel: 0,
            default_preview_raw: false,
        }
    }
}

impl PainterConfig {
    /// Create a config with the given initial radius and intensity
    pub fn new(default_radius: f32, default_intensity: f32) -> Self {
        Self {
            default_radius,
            default_intensity,
            ..Default::default()
        }
    }

    /// Initial radius after clamping to the limits
    pub fn initial_radius(&self) -> f32 {
        self.limits.clamp_radius(self.default_radius)
    }

    /// Initial intensity after clamping to the limits
    pub fn initial_intensity(&self) -> f32 {
        self.limits.clamp_intensity(self.default_intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PainterConfig::default();
        assert_eq!(config.limits.max_radius, MAX_RADIUS);
        assert_eq!(config.limits.min_intensity, MIN_INTENSITY);
        assert_eq!(config.default_radius, DEFAULT_RADIUS);
        assert_eq!(config.default_channel, 0);
        assert!(!config.default_preview_raw);
    }

    #[test]
    fn test_clamp_radius() {
        let limits = BrushLimits::default();
        assert_eq!(limits.clamp_radius(-3.0), 0.0);
        assert_eq!(limits.clamp_radius(7.5), 7.5);
        assert_eq!(limits.clamp_radius(50.0), 20.0);
        assert_eq!(limits.clamp_radius(f32::NAN), 0.0);
    }

    #[test]
    fn test_clamp_intensity() {
        let limits = BrushLimits::default();
        assert_eq!(limits.clamp_intensity(-2.0), -1.0);
        assert_eq!(limits.clamp_intensity(0.25), 0.25);
        assert_eq!(limits.clamp_intensity(3.0), 1.0);
        assert_eq!(limits.clamp_intensity(f32::NAN), 0.0);
    }

    #[test]
    fn test_initial_values_are_clamped() {
        let config = PainterConfig::new(100.0, -5.0);
        assert_eq!(config.initial_radius(), MAX_RADIUS);
        assert_eq!(config.initial_intensity(), MIN_INTENSITY);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PainterConfig =
            serde_json::from_str(r#"{ "default_radius": 4.0, "limits": { "max_radius": 8.0 } }"#)
                .unwrap();
        assert_eq!(config.default_radius, 4.0);
        assert_eq!(config.limits.max_radius, 8.0);
        assert_eq!(config.limits.min_radius, MIN_RADIUS);
        assert_eq!(config.default_intensity, DEFAULT_INTENSITY);
    }
}
