use velo_engine::coords::Vec2;
use velo_engine::scene::shapes::InvalidGeometry;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::parts::{footer, header, start_button, stat_tile};
use crate::theme;

/// Idle screen: header, start button, zeroed stat tiles, connection
/// footer.
pub(crate) fn build(p: &mut Painter<'_>, fonts: &Fonts) -> Result<(), InvalidGeometry> {
    header::push(p, fonts, "SPEEDTEST");

    start_button::push(p, fonts, Vec2::new(540.0, 1060.0));

    let stats_y = theme::HEIGHT as f32 - 600.0;
    stat_tile::push(p, fonts, Vec2::new(100.0, stats_y), "Ping", "0", "ms", theme::GREEN_PING);
    stat_tile::push(p, fonts, Vec2::new(680.0, stats_y), "Jitter", "0", "ms", theme::ORANGE);

    footer::push(p, fonts, "Moldtelecom", "192.168.1.105", "Orange Moldova");

    Ok(())
}
