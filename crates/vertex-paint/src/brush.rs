//! Brush state and the host actions that edit it
//!
//! The brush is pure data: radius, intensity, target channel and the raw
//! preview toggle. Hosts edit it through [`BrushCommand`]s (size slider,
//! intensity slider, channel toolbar, preview button); setters clamp to the
//! configured [`BrushLimits`]. Values written directly to the public fields
//! are not re-validated, which is why the paint engine clamps the *result*
//! of each update instead.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vertex_paint_config::{BrushLimits, PainterConfig};

use crate::error::PaintError;
use crate::types::Channel;

/// Current brush parameters for a painting session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushState {
    /// World-space radius; vertices strictly closer than this are painted
    pub radius: f32,
    /// Amount added to the target channel per stroke, in [-1, 1]
    pub intensity: f32,
    /// Channel the brush writes to
    pub channel: Channel,
    /// Whether the host shows raw vertex colors instead of the shaded mesh
    pub preview_raw: bool,
    /// Ranges enforced by the setters
    #[serde(default)]
    pub limits: BrushLimits,
}

impl Default for BrushState {
    fn default() -> Self {
        let config = PainterConfig::default();
        Self {
            radius: config.initial_radius(),
            intensity: config.initial_intensity(),
            channel: Channel::Red,
            preview_raw: config.default_preview_raw,
            limits: config.limits,
        }
    }
}

impl BrushState {
    /// Create a brush, clamping radius and intensity to the default limits
    pub fn new(radius: f32, intensity: f32, channel: Channel) -> Self {
        let limits = BrushLimits::default();
        Self {
            radius: limits.clamp_radius(radius),
            intensity: limits.clamp_intensity(intensity),
            channel,
            preview_raw: false,
            limits,
        }
    }

    /// Build the initial brush from a painter config
    ///
    /// Fails if `default_channel` is not a valid toolbar index.
    pub fn from_config(config: &PainterConfig) -> Result<Self, PaintError> {
        Ok(Self {
            radius: config.initial_radius(),
            intensity: config.initial_intensity(),
            channel: Channel::try_from(config.default_channel)?,
            preview_raw: config.default_preview_raw,
            limits: config.limits,
        })
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = self.limits.clamp_radius(radius);
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = self.limits.clamp_intensity(intensity);
    }

    pub fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
    }

    /// Flip the raw preview flag, returning the new value
    pub fn toggle_preview_raw(&mut self) -> bool {
        self.preview_raw = !self.preview_raw;
        self.preview_raw
    }

    /// Caption for the host's preview button
    pub fn preview_label(&self) -> &'static str {
        if self.preview_raw {
            "Hide Raw Painting"
        } else {
            "Show Raw Painting"
        }
    }

    /// Apply a host command to the brush
    pub fn apply(&mut self, command: BrushCommand) {
        debug!("BrushState::apply: {:?}", command);
        match command {
            BrushCommand::SetRadius { radius } => self.set_radius(radius),
            BrushCommand::SetIntensity { intensity } => self.set_intensity(intensity),
            BrushCommand::SetChannel { channel } => self.set_channel(channel),
            BrushCommand::SetPreviewRaw { enabled } => self.preview_raw = enabled,
            BrushCommand::TogglePreviewRaw => {
                self.toggle_preview_raw();
            }
        }
    }

    /// Outline the host should draw for a hit at `center` with surface `normal`
    pub fn cursor(&self, center: Vec3, normal: Vec3) -> BrushCursor {
        BrushCursor {
            center,
            normal: normal.normalize_or_zero(),
            radius: self.radius,
        }
    }
}

/// Brush edits issued by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushCommand {
    /// Size slider
    SetRadius { radius: f32 },
    /// Intensity slider
    SetIntensity { intensity: f32 },
    /// Channel toolbar
    SetChannel { channel: Channel },
    /// Explicitly enable or disable the raw color preview
    SetPreviewRaw { enabled: bool },
    /// Preview button
    TogglePreviewRaw,
}

/// Wire disc the host draws to show the brush footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushCursor {
    /// Disc center (world space)
    pub center: Vec3,
    /// Disc normal, unit length (zero if the host gave a zero normal)
    pub normal: Vec3,
    /// Disc radius (world units)
    pub radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = BrushState::default();
        assert_eq!(brush.radius, vertex_paint_config::DEFAULT_RADIUS);
        assert_eq!(brush.intensity, vertex_paint_config::DEFAULT_INTENSITY);
        assert_eq!(brush.channel, Channel::Red);
        assert!(!brush.preview_raw);
    }

    #[test]
    fn test_new_clamps() {
        let brush = BrushState::new(40.0, 2.0, Channel::Blue);
        assert_eq!(brush.radius, 20.0);
        assert_eq!(brush.intensity, 1.0);
        assert_eq!(brush.channel, Channel::Blue);
    }

    #[test]
    fn test_from_config() {
        let config = PainterConfig {
            default_channel: 3,
            default_preview_raw: true,
            ..PainterConfig::new(2.5, -0.25)
        };
        let brush = BrushState::from_config(&config).unwrap();
        assert_eq!(brush.radius, 2.5);
        assert_eq!(brush.intensity, -0.25);
        assert_eq!(brush.channel, Channel::Alpha);
        assert!(brush.preview_raw);
    }

    #[test]
    fn test_from_config_rejects_bad_channel() {
        let config = PainterConfig {
            default_channel: 9,
            ..Default::default()
        };
        assert!(matches!(
            BrushState::from_config(&config),
            Err(PaintError::InvalidChannel(_))
        ));
    }

    #[test]
    fn test_commands() {
        let mut brush = BrushState::default();

        brush.apply(BrushCommand::SetRadius { radius: 25.0 });
        assert_eq!(brush.radius, 20.0);

        brush.apply(BrushCommand::SetIntensity { intensity: -0.3 });
        assert!((brush.intensity + 0.3).abs() < 1e-6);

        brush.apply(BrushCommand::SetChannel { channel: Channel::Green });
        assert_eq!(brush.channel, Channel::Green);

        brush.apply(BrushCommand::TogglePreviewRaw);
        assert!(brush.preview_raw);
        assert_eq!(brush.preview_label(), "Hide Raw Painting");

        brush.apply(BrushCommand::SetPreviewRaw { enabled: false });
        assert!(!brush.preview_raw);
        assert_eq!(brush.preview_label(), "Show Raw Painting");
    }

    #[test]
    fn test_command_json() {
        let command: BrushCommand =
            serde_json::from_str(r#"{ "SetChannel": { "channel": "blue" } }"#).unwrap();
        assert_eq!(command, BrushCommand::SetChannel { channel: Channel::Blue });

        let json = serde_json::to_string(&BrushCommand::TogglePreviewRaw).unwrap();
        assert_eq!(json, "\"TogglePreviewRaw\"");
    }

    #[test]
    fn test_cursor() {
        let brush = BrushState::new(3.0, 0.5, Channel::Red);
        let cursor = brush.cursor(Vec3::ONE, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(cursor.center, Vec3::ONE);
        assert_eq!(cursor.normal, Vec3::Y);
        assert_eq!(cursor.radius, 3.0);
    }
}
