use velo_engine::coords::{Rect, Vec2};

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

const HEIGHT: f32 = 250.0;

/// Connection band pinned to the bottom edge: ISP badge and name, local
/// IP, and the selected test server.
pub fn push(p: &mut Painter<'_>, fonts: &Fonts, isp: &str, ip: &str, server: &str) {
    let top = theme::HEIGHT as f32 - HEIGHT;
    p.fill_rect(Rect::new(0.0, top, theme::WIDTH as f32, HEIGHT), theme::FOOTER_BG);

    p.fill_circle(Vec2::new(65.0, top + 55.0), 15.0, theme::TEXT_GREY);
    p.text(isp, fonts.regular, theme::FONT_LARGE, theme::TEXT_WHITE, Vec2::new(100.0, top + 30.0));
    p.text(ip, fonts.regular, theme::FONT_MED, theme::TEXT_GREY, Vec2::new(100.0, top + 90.0));
    p.text(
        format!("Server: {server}"),
        fonts.regular,
        theme::FONT_MED,
        theme::TEXT_WHITE,
        Vec2::new(100.0, top + 150.0),
    );
}
