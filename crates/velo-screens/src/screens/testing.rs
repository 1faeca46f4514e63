use velo_engine::coords::Vec2;
use velo_engine::scene::shapes::InvalidGeometry;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::parts::{gauge, header};
use crate::theme;

/// Download-in-progress sweep shown on the testing screen.
const PROGRESS_SWEEP_DEG: f32 = 200.0;

/// Mid-test screen: header, status line, the gauge at a sample download
/// speed.
pub(crate) fn build(p: &mut Painter<'_>, fonts: &Fonts) -> Result<(), InvalidGeometry> {
    header::push(p, fonts, "SPEEDTEST");

    let status = "Downloading...";
    let x = p.centered_x(status, fonts.regular, theme::FONT_MED, theme::WIDTH as f32);
    p.text(status, fonts.regular, theme::FONT_MED, theme::CYAN_BRIGHT, Vec2::new(x, 310.0));

    gauge::push(p, fonts, "85.5", "Mbps", PROGRESS_SWEEP_DEG)
}
