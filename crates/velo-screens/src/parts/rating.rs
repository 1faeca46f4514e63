use velo_engine::coords::Vec2;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::theme;

const STAR_SIZE: f32 = 100.0;
const STAR_SPACING: f32 = 120.0;

/// Provider rating block: captions and a five-star row, `lit` stars in
/// the accent color and the rest in the track color.
pub fn push(p: &mut Painter<'_>, fonts: &Fonts, provider: &str, lit: u32, y: f32) {
    let x = p.centered_x("RATE PROVIDER", fonts.regular, theme::FONT_MED, theme::WIDTH as f32);
    p.text("RATE PROVIDER", fonts.regular, theme::FONT_MED, theme::TEXT_WHITE, Vec2::new(x, y));

    let px = p.centered_x(provider, fonts.regular, theme::FONT_MED, theme::WIDTH as f32);
    p.text(provider, fonts.regular, theme::FONT_MED, theme::TEXT_GREY, Vec2::new(px, y + 60.0));

    for i in 0..5 {
        let color = if i < lit { theme::CYAN } else { theme::TRACK };
        p.text(
            "★",
            fonts.regular,
            STAR_SIZE,
            color,
            Vec2::new(250.0 + i as f32 * STAR_SPACING, y + 150.0),
        );
    }
}
