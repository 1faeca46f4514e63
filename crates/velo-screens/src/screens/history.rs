use velo_engine::coords::{Rect, Vec2};
use velo_engine::scene::shapes::InvalidGeometry;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::parts::history_card::{self, HistoryEntry};
use crate::theme;

const CARD_HEIGHT: f32 = 280.0;
const CARD_PITCH: f32 = 320.0;

const ENTRIES: [HistoryEntry; 4] = [
    HistoryEntry {
        date: "21.01.2026 14:30",
        provider: "Moldtelecom",
        down_mbps: "85.5",
        up_mbps: "42.1",
        ping_ms: "12",
        starred: true,
    },
    HistoryEntry {
        date: "21.01.2026 14:31",
        provider: "Moldtelecom",
        down_mbps: "84.9",
        up_mbps: "41.8",
        ping_ms: "13",
        starred: false,
    },
    HistoryEntry {
        date: "21.01.2026 14:32",
        provider: "Moldtelecom",
        down_mbps: "86.2",
        up_mbps: "42.4",
        ping_ms: "12",
        starred: false,
    },
    HistoryEntry {
        date: "21.01.2026 14:33",
        provider: "Moldtelecom",
        down_mbps: "85.1",
        up_mbps: "42.0",
        ping_ms: "14",
        starred: false,
    },
];

/// Past measurements: back affordance, title, one card per entry.
pub(crate) fn build(p: &mut Painter<'_>, fonts: &Fonts) -> Result<(), InvalidGeometry> {
    p.text("←", fonts.bold, theme::FONT_TITLE, theme::TEXT_WHITE, Vec2::new(40.0, 60.0));
    p.text("History", fonts.bold, theme::FONT_TITLE, theme::TEXT_WHITE, Vec2::new(150.0, 60.0));

    for (i, entry) in ENTRIES.iter().enumerate() {
        let y = 200.0 + i as f32 * CARD_PITCH;
        let rect = Rect::new(40.0, y, theme::WIDTH as f32 - 80.0, CARD_HEIGHT);
        history_card::push(p, fonts, rect, entry);
    }

    Ok(())
}
