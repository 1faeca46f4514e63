use std::fmt;

use velo_engine::canvas::{Canvas, EncodeError};
use velo_engine::render::Renderer;
use velo_engine::scene::DrawList;
use velo_engine::scene::shapes::InvalidGeometry;

use crate::fonts::Fonts;
use crate::painter::Painter;
use crate::{screens, theme};

/// The four mock-up screens, as a tagged set rather than four scripts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScreenKind {
    Main,
    Testing,
    Result,
    History,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 4] = [
        ScreenKind::Main,
        ScreenKind::Testing,
        ScreenKind::Result,
        ScreenKind::History,
    ];

    /// Output file name, matching the original mock-up set.
    pub fn file_name(self) -> &'static str {
        match self {
            ScreenKind::Main => "screen_1_main.png",
            ScreenKind::Testing => "screen_2_test.png",
            ScreenKind::Result => "screen_3_result.png",
            ScreenKind::History => "screen_4_history.png",
        }
    }
}

/// Failure while composing or encoding one screen.
#[derive(Debug)]
pub enum ScreenError {
    Geometry(InvalidGeometry),
    Encode(EncodeError),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Geometry(e) => write!(f, "{e}"),
            ScreenError::Encode(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenError::Geometry(e) => Some(e),
            ScreenError::Encode(e) => Some(e),
        }
    }
}

impl From<InvalidGeometry> for ScreenError {
    fn from(e: InvalidGeometry) -> Self {
        ScreenError::Geometry(e)
    }
}

impl From<EncodeError> for ScreenError {
    fn from(e: EncodeError) -> Self {
        ScreenError::Encode(e)
    }
}

/// Renders one screen to PNG bytes (1080×1920 RGB).
///
/// Pure with respect to the filesystem: the caller owns the canvas
/// lifecycle and any output IO.
pub fn render_screen(kind: ScreenKind, fonts: &Fonts) -> Result<Vec<u8>, ScreenError> {
    let mut draw_list = DrawList::new();
    let mut painter = Painter::new(&mut draw_list, &fonts.system);

    match kind {
        ScreenKind::Main => screens::main::build(&mut painter, fonts),
        ScreenKind::Testing => screens::testing::build(&mut painter, fonts),
        ScreenKind::Result => screens::result::build(&mut painter, fonts),
        ScreenKind::History => screens::history::build(&mut painter, fonts),
    }?;

    let mut canvas = Canvas::new(theme::WIDTH, theme::HEIGHT, theme::BG);
    Renderer::new().render(&mut canvas, &draw_list, &fonts.system);

    Ok(canvas.encode_png()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::gauge;
    use velo_engine::coords::Vec2;
    use velo_engine::paint::Color;

    fn decode(kind: ScreenKind) -> image::RgbImage {
        let fonts = Fonts::load().unwrap();
        let png = render_screen(kind, &fonts).unwrap();
        image::load_from_memory(&png).unwrap().to_rgb8()
    }

    fn color_at(img: &image::RgbImage, x: u32, y: u32) -> Color {
        let p = img.get_pixel(x, y).0;
        Color::new(p[0], p[1], p[2])
    }

    /// Pixel on the gauge stroke midline at `deg`.
    fn gauge_sample(img: &image::RgbImage, deg: f32) -> Color {
        let mid = gauge::RADIUS - gauge::STROKE / 2.0;
        let p = gauge::CENTER + Vec2::from_angle_deg(deg) * mid;
        color_at(img, p.x.round() as u32, p.y.round() as u32)
    }

    #[test]
    fn every_screen_renders_a_1080x1920_png() {
        for kind in ScreenKind::ALL {
            let img = decode(kind);
            assert_eq!((img.width(), img.height()), (1080, 1920), "{kind:?}");
        }
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = ScreenKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn testing_gauge_fades_cyan_to_purple() {
        let img = decode(ScreenKind::Testing);

        assert_eq!(gauge_sample(&img, 137.0), theme::CYAN_BRIGHT);
        assert_eq!(gauge_sample(&img, 333.0), theme::PURPLE_BRIGHT);

        let mut prev = gauge_sample(&img, 137.0);
        for deg in [150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0] {
            let c = gauge_sample(&img, deg);
            assert!(c.r >= prev.r, "red regressed at {deg}°");
            assert!(c.g <= prev.g, "green regressed at {deg}°");
            prev = c;
        }
    }

    #[test]
    fn testing_gauge_track_shows_past_the_progress_sweep() {
        let img = decode(ScreenKind::Testing);
        // 390° (= 30°) is within the 270° track but past the 200° sweep.
        assert_eq!(gauge_sample(&img, 390.0), theme::TRACK);
    }

    #[test]
    fn main_screen_has_footer_band_and_background() {
        let img = decode(ScreenKind::Main);
        assert_eq!(color_at(&img, 10, 1800), theme::FOOTER_BG);
        assert_eq!(color_at(&img, 10, 1600), theme::BG);
    }

    #[test]
    fn history_screen_draws_card_backgrounds() {
        let img = decode(ScreenKind::History);
        // Inside the first card, clear of its text.
        assert_eq!(color_at(&img, 900, 420), theme::CARD_BG);
        // In the gutter between cards.
        assert_eq!(color_at(&img, 540, 495), theme::BG);
    }
}
