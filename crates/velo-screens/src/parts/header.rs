use velo_engine::coords::Vec2;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

/// App bar: "History" hint on the left, bold centered title, "Settings"
/// right-aligned.
pub fn push(p: &mut Painter<'_>, fonts: &Fonts, title: &str) {
    p.text("History", fonts.regular, theme::FONT_SMALL, theme::TEXT_GREY, Vec2::new(50.0, 74.0));

    let x = p.centered_x(title, fonts.bold, theme::FONT_TITLE, theme::WIDTH as f32);
    p.text(title, fonts.bold, theme::FONT_TITLE, theme::TEXT_WHITE, Vec2::new(x, 60.0));

    let w = p.measure("Settings", fonts.regular, theme::FONT_SMALL).x;
    p.text(
        "Settings",
        fonts.regular,
        theme::FONT_SMALL,
        theme::TEXT_GREY,
        Vec2::new(theme::WIDTH as f32 - 50.0 - w, 74.0),
    );
}
