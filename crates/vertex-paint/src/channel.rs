//! Single-channel additive update applied to each painted vertex

use crate::types::{Channel, VertexColor};

/// Add `intensity` to one channel of `color`, clamping the result to `[0, 1]`.
///
/// The other three channels are copied unchanged. A NaN intensity leaves the
/// channel as it was.
#[inline]
pub fn apply_channel(color: VertexColor, channel: Channel, intensity: f32) -> VertexColor {
    let mut out = color;
    let value = out.channel_mut(channel);
    let sum = *value + intensity;
    if !sum.is_nan() {
        *value = sum.clamp(0.0, 1.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed_fields(a: VertexColor, b: VertexColor) -> usize {
        Channel::ALL
            .iter()
            .filter(|c| a.channel(**c) != b.channel(**c))
            .count()
    }

    #[test]
    fn test_adds_to_target_channel_only() {
        let color = VertexColor::new(0.1, 0.2, 0.3, 0.4);
        let out = apply_channel(color, Channel::Green, 0.5);

        assert!((out.g - 0.7).abs() < 1e-6);
        assert_eq!(out.r, color.r);
        assert_eq!(out.b, color.b);
        assert_eq!(out.a, color.a);
        assert_eq!(changed_fields(color, out), 1);
    }

    #[test]
    fn test_clamps_to_unit_range() {
        let color = VertexColor::new(0.8, 0.2, 0.0, 0.0);

        assert_eq!(apply_channel(color, Channel::Red, 0.5).r, 1.0);
        assert_eq!(apply_channel(color, Channel::Green, -1.0).g, 0.0);
        assert_eq!(apply_channel(color, Channel::Blue, f32::INFINITY).b, 1.0);
    }

    #[test]
    fn test_saturation_is_stable() {
        for channel in Channel::ALL {
            let color = VertexColor::new(0.25, 0.5, 0.75, 0.1);
            let once = apply_channel(color, channel, 1.0);
            let twice = apply_channel(once, channel, 1.0);
            assert_eq!(once, twice);
            assert_eq!(once.channel(channel), 1.0);
        }
    }

    #[test]
    fn test_other_channels_untouched_for_all_channels() {
        let color = VertexColor::new(0.3, 0.3, 0.3, 0.3);
        for channel in Channel::ALL {
            for intensity in [-1.0, -0.4, 0.0, 0.4, 1.0] {
                let out = apply_channel(color, channel, intensity);
                assert!(changed_fields(color, out) <= 1);
                let value = out.channel(channel);
                assert!((0.0..=1.0).contains(&value));
                for other in Channel::ALL.iter().filter(|c| **c != channel) {
                    assert_eq!(out.channel(*other), color.channel(*other));
                }
            }
        }
    }

    #[test]
    fn test_nan_intensity_is_ignored() {
        let color = VertexColor::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(apply_channel(color, Channel::Alpha, f32::NAN), color);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let color = VertexColor::new(1.5, 0.0, 0.0, 0.0);
        assert_eq!(apply_channel(color, Channel::Red, 0.0).r, 1.0);
    }
}
