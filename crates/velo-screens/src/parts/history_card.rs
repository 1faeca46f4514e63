use velo_engine::coords::{Rect, Vec2};
use velo_engine::scene::shapes::Border;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

/// One past measurement shown on the history screen.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub date: &'static str,
    pub provider: &'static str,
    pub down_mbps: &'static str,
    pub up_mbps: &'static str,
    pub ping_ms: &'static str,
    pub starred: bool,
}

/// One history entry card. Content is clipped to the card rect so long
/// provider strings cannot spill into the next card.
pub fn push(p: &mut Painter<'_>, fonts: &Fonts, rect: Rect, entry: &HistoryEntry) {
    p.rect(rect, Some(theme::CARD_BG), Some(Border::new(1.0, theme::TRACK)));

    p.push_clip(rect);

    let x = rect.origin.x + 30.0;
    let y = rect.origin.y;

    p.text(entry.date, fonts.regular, theme::FONT_SMALL, theme::TEXT_GREY, Vec2::new(x, y + 30.0));
    p.text(
        entry.provider,
        fonts.regular,
        theme::FONT_SMALL,
        theme::TEXT_GREY,
        Vec2::new(theme::WIDTH as f32 - 350.0, y + 30.0),
    );

    p.text(
        format!("↓ {}", entry.down_mbps),
        fonts.regular,
        theme::FONT_LARGE,
        theme::TEXT_WHITE,
        Vec2::new(x, y + 100.0),
    );
    p.text("Mbps", fonts.regular, theme::FONT_SMALL, theme::CYAN, Vec2::new(x, y + 170.0));

    p.text(
        format!("↑ {}", entry.up_mbps),
        fonts.regular,
        theme::FONT_LARGE,
        theme::TEXT_WHITE,
        Vec2::new(400.0, y + 100.0),
    );
    p.text("Mbps", fonts.regular, theme::FONT_SMALL, theme::PURPLE, Vec2::new(400.0, y + 170.0));

    p.text(entry.ping_ms, fonts.regular, theme::FONT_LARGE, theme::TEXT_WHITE, Vec2::new(700.0, y + 100.0));
    p.text("ms", fonts.regular, theme::FONT_SMALL, theme::GREEN_PING, Vec2::new(700.0, y + 170.0));

    if entry.starred {
        p.text(
            "★",
            fonts.regular,
            theme::FONT_LARGE,
            theme::CYAN,
            Vec2::new(theme::WIDTH as f32 - 130.0, y + 100.0),
        );
    }

    p.pop_clip();
}
