use velo_engine::coords::Vec2;
use velo_engine::scene::shapes::{GradientArc, InvalidGeometry};

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

pub const CENTER: Vec2 = Vec2::new(540.0, 760.0);
pub const RADIUS: f32 = 350.0;
pub const STROKE: f32 = 50.0;
/// Gauge opening faces down: the track runs 135° → 405°.
pub const START_DEG: f32 = 135.0;
pub const TRACK_SWEEP_DEG: f32 = 270.0;

/// Speed gauge: track ring, gradient progress arc, needle at the sweep
/// end, centered value with its unit below.
pub fn push(
    p: &mut Painter<'_>,
    fonts: &Fonts,
    value: &str,
    unit: &str,
    progress_sweep_deg: f32,
) -> Result<(), InvalidGeometry> {
    p.arc(CENTER, RADIUS, START_DEG, TRACK_SWEEP_DEG, STROKE, theme::TRACK)?;

    p.gradient_arc(GradientArc::new(
        CENTER,
        RADIUS,
        START_DEG,
        progress_sweep_deg,
        STROKE,
        theme::CYAN_BRIGHT,
        theme::PURPLE_BRIGHT,
    ))?;

    let tip = CENTER + Vec2::from_angle_deg(START_DEG + progress_sweep_deg) * (RADIUS - 20.0);
    p.line(CENTER, tip, 5.0, theme::TEXT_WHITE);

    let x = p.centered_x(value, fonts.bold, theme::FONT_HUGE, theme::WIDTH as f32);
    p.text(value, fonts.bold, theme::FONT_HUGE, theme::TEXT_WHITE, Vec2::new(x, CENTER.y - 80.0));

    let ux = p.centered_x(unit, fonts.regular, theme::FONT_MED, theme::WIDTH as f32);
    p.text(unit, fonts.regular, theme::FONT_MED, theme::CYAN_BRIGHT, Vec2::new(ux, CENTER.y + 80.0));

    Ok(())
}
