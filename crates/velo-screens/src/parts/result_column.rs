use velo_engine::coords::Vec2;
use velo_engine::paint::Color;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

/// One download/upload result column: direction icon, label, huge value,
/// unit, accent underline.
pub fn push(
    p: &mut Painter<'_>,
    fonts: &Fonts,
    origin: Vec2,
    label: &str,
    value: &str,
    accent: Color,
    download: bool,
) {
    let (x, y) = (origin.x, origin.y);

    p.ring(Vec2::new(x + 15.0, y + 15.0), 15.0, 2.0, accent);
    let arrow = if download { "↓" } else { "↑" };
    p.text(arrow, fonts.regular, theme::FONT_MED, accent, Vec2::new(x + 6.0, y - 4.0));

    p.text(label, fonts.regular, theme::FONT_MED, theme::TEXT_WHITE, Vec2::new(x + 40.0, y));
    p.text(value, fonts.bold, theme::FONT_HUGE, theme::TEXT_WHITE, Vec2::new(x - 20.0, y + 50.0));
    p.text("Mbps", fonts.regular, theme::FONT_MED, theme::TEXT_GREY, Vec2::new(x + 30.0, y + 200.0));

    p.line(Vec2::new(x, y + 240.0), Vec2::new(x + 150.0, y + 240.0), 4.0, accent);
}
