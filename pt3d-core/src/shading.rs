/// Discretized luminance shading
use crate::vector::Vec4;

/// Number of discrete shade levels. Level 0 is the black floor; the
/// remaining twelve split into dark-grey, grey, and white tiers of four
/// sub-levels each. The glyph/color pair for each level belongs to the
/// rasterizer; the bucket count and thresholds live here.
pub const SHADE_LEVELS: u8 = 13;

/// Light intensity floor applied before quantization.
pub const INTENSITY_FLOOR: f32 = 0.1;

/// Map a continuous light intensity to a shade level in `0..SHADE_LEVELS`.
pub fn quantize(intensity: f32) -> u8 {
    let level = (intensity * SHADE_LEVELS as f32).floor();
    (level.max(0.0) as u8).min(SHADE_LEVELS - 1)
}

/// Directional-light intensity for a surface normal: the dot product
/// against the (normalized) light direction, floored at `INTENSITY_FLOOR`.
pub fn light_intensity(light_direction: Vec4, normal: Vec4) -> f32 {
    light_direction.normalize().dot(normal).max(INTENSITY_FLOOR)
}
