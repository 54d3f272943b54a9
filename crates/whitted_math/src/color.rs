use crate::Vec3;

/// Linear RGB radiometric value. Components are not bounded above.
pub type Color = Vec3;

/// A position in world or camera space.
pub type Point3 = Vec3;

/// Convert a linear color to 8-bit RGB.
///
/// Each channel is scaled by 255 and clamped on its own; values above 1.0
/// saturate at 255 and negative values at 0.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    // clamp keeps NaN, which `as` then maps to 0
    (value * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb8_in_range() {
        assert_eq!(color_to_rgb8(Vec3::new(0.0, 0.5, 1.0)), [0, 127, 255]);
    }

    #[test]
    fn test_color_to_rgb8_clamps_per_channel() {
        // An overexposed red must not bleed into the other channels
        assert_eq!(color_to_rgb8(Vec3::new(4.0, 0.2, -1.0)), [255, 51, 0]);
    }

    #[test]
    fn test_color_to_rgb8_nan_is_black() {
        assert_eq!(color_to_rgb8(Vec3::splat(f32::NAN)), [0, 0, 0]);
    }
}
