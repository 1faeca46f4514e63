use velo_engine::coords::Vec2;
use velo_engine::scene::shapes::InvalidGeometry;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::parts::{header, rating, result_column, stat_tile};
use crate::theme;

/// Post-test screen: download/upload columns, stat tiles, a separator,
/// the rating block, and a restart ring.
pub(crate) fn build(p: &mut Painter<'_>, fonts: &Fonts) -> Result<(), InvalidGeometry> {
    header::push(p, fonts, "SPEEDTEST");

    result_column::push(p, fonts, Vec2::new(150.0, 300.0), "DOWNLOAD", "85.5", theme::CYAN_BRIGHT, true);
    result_column::push(p, fonts, Vec2::new(600.0, 300.0), "UPLOAD", "42.1", theme::PURPLE_BRIGHT, false);

    stat_tile::push(p, fonts, Vec2::new(150.0, 700.0), "Ping", "12", "ms", theme::GREEN_PING);
    stat_tile::push(p, fonts, Vec2::new(600.0, 700.0), "Jitter", "4", "ms", theme::ORANGE);

    p.line(
        Vec2::new(100.0, 900.0),
        Vec2::new(theme::WIDTH as f32 - 100.0, 900.0),
        2.0,
        theme::TRACK,
    );

    rating::push(p, fonts, "Moldtelecom", 4, 1000.0);

    let restart = Vec2::new(540.0, 1500.0);
    p.ring(restart, 80.0, 3.0, theme::CYAN);
    let x = p.centered_x("GO", fonts.bold, theme::FONT_TITLE, theme::WIDTH as f32);
    p.text("GO", fonts.bold, theme::FONT_TITLE, theme::TEXT_WHITE, Vec2::new(x, restart.y - 30.0));

    Ok(())
}
