use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PaintError;

/// Color channel targeted by the brush
///
/// Discriminants follow the toolbar order the host shows (Red, Green, Blue, Alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Channel {
    #[default]
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl Channel {
    /// All channels in toolbar order
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Toolbar index of this channel
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Label shown on the channel toolbar
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Alpha => "Alpha",
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = PaintError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Channel::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| PaintError::InvalidChannel(tag.to_string()))
    }
}

impl FromStr for Channel {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            "a" | "alpha" => Ok(Channel::Alpha),
            _ => Err(PaintError::InvalidChannel(s.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single vertex color
///
/// Layout matches a `[f32; 4]` RGBA vertex attribute so buffers can be handed
/// to the GPU or to a host mesh without conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct VertexColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VertexColor {
    /// Transparent black, the color new buffers are filled with
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Value of one channel
    #[inline]
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Mutable access to one channel
    #[inline]
    pub fn channel_mut(&mut self, channel: Channel) -> &mut f32 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
            Channel::Alpha => &mut self.a,
        }
    }
}

impl From<[f32; 4]> for VertexColor {
    fn from(value: [f32; 4]) -> Self {
        Self::from_array(value)
    }
}

impl From<VertexColor> for [f32; 4] {
    fn from(value: VertexColor) -> Self {
        value.to_array()
    }
}

/// One input sample delivered by the host
///
/// `position` and `normal` come from the host's raycast against the target mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// World-space hit point under the cursor
    pub position: Vec3,
    /// Surface normal at the hit point
    pub normal: Vec3,
    /// Primary button pressed on this sample
    pub primary_down: bool,
}

impl PointerSample {
    /// A hover sample (cursor only, no paint)
    pub fn hover(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            primary_down: false,
        }
    }

    /// A sample with the primary button pressed
    pub fn press(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            primary_down: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_from_index() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(Channel::try_from(i as u8).unwrap(), *channel);
            assert_eq!(channel.index(), i as u8);
        }
    }

    #[test]
    fn test_invalid_channel_index() {
        let err = Channel::try_from(4).unwrap_err();
        assert!(matches!(err, PaintError::InvalidChannel(ref tag) if tag == "4"));
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("red".parse::<Channel>().unwrap(), Channel::Red);
        assert_eq!(" Green ".parse::<Channel>().unwrap(), Channel::Green);
        assert_eq!("B".parse::<Channel>().unwrap(), Channel::Blue);
        assert_eq!("alpha".parse::<Channel>().unwrap(), Channel::Alpha);
        assert!(matches!(
            "magenta".parse::<Channel>(),
            Err(PaintError::InvalidChannel(_))
        ));
    }

    #[test]
    fn test_channel_labels() {
        let labels: Vec<_> = Channel::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Red", "Green", "Blue", "Alpha"]);
    }

    #[test]
    fn test_vertex_color_layout() {
        assert_eq!(std::mem::size_of::<VertexColor>(), 16);
        let color = VertexColor::from([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(color.channel(Channel::Blue), 0.3);
        let array: [f32; 4] = color.into();
        assert_eq!(array, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_channel_serde_names() {
        let json = serde_json::to_string(&Channel::Alpha).unwrap();
        assert_eq!(json, "\"alpha\"");
        let channel: Channel = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(channel, Channel::Green);
    }
}
