use velo_engine::coords::Vec2;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::parts::glow;
use crate::theme;

pub const RADIUS: f32 = 180.0;

/// Idle start control: ripple glow, cyan ring, centered label.
pub fn push(p: &mut Painter<'_>, fonts: &Fonts, center: Vec2) {
    glow::push(p, center, RADIUS, theme::CYAN, theme::BG, 3);
    p.ring(center, RADIUS, 5.0, theme::CYAN);

    let x = p.centered_x("START", fonts.bold, theme::FONT_TITLE, theme::WIDTH as f32);
    p.text("START", fonts.bold, theme::FONT_TITLE, theme::TEXT_WHITE, Vec2::new(x, center.y - 30.0));
}
