use velo_engine::coords::Vec2;
use velo_engine::paint::Color;

use crate::painter::Painter;

/// Spacing between successive glow rings, in pixels.
const RING_STEP: f32 = 40.0;

/// Concentric outline rings fading toward the backdrop.
///
/// The canvas has no alpha channel, so the fade is a stepped color
/// interpolation: ring `i` is drawn in
/// `color.lerp(backdrop, (i + 1) / (rings + 1))` at radius
/// `radius + (i + 1) · 40`.
pub fn push(p: &mut Painter<'_>, center: Vec2, radius: f32, color: Color, backdrop: Color, rings: u32) {
    for i in 0..rings {
        let t = (i + 1) as f32 / (rings + 1) as f32;
        p.ring(center, radius + (i + 1) as f32 * RING_STEP, 2.0, color.lerp(backdrop, t));
    }
}
