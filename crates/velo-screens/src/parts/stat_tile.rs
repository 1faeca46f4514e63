use velo_engine::coords::Vec2;
use velo_engine::paint::Color;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

/// Labelled metric with an accent icon ring: label over value, unit
/// trailing the value.
pub fn push(
    p: &mut Painter<'_>,
    fonts: &Fonts,
    origin: Vec2,
    label: &str,
    value: &str,
    unit: &str,
    accent: Color,
) {
    p.ring(origin + Vec2::new(20.0, 20.0), 20.0, 3.0, accent);

    p.text(label, fonts.regular, theme::FONT_MED, theme::TEXT_GREY, origin + Vec2::new(50.0, 5.0));
    p.text(value, fonts.regular, theme::FONT_LARGE, theme::TEXT_WHITE, origin + Vec2::new(50.0, 50.0));

    let w = p.measure(value, fonts.regular, theme::FONT_LARGE).x;
    p.text(unit, fonts.regular, theme::FONT_SMALL, theme::TEXT_GREY, origin + Vec2::new(60.0 + w, 65.0));
}
