//! CPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and blend pixels into a
//! [`Canvas`]. Each shape renderer rasterizes its own bounding box with
//! edge anti-aliasing and honors the item's scissor rect.
//!
//! Convention:
//! - geometry is in pixels (top-left origin, +Y down)
//! - a pixel is sampled at its center (`x + 0.5`, `y + 0.5`)

mod common;
mod shapes;

use crate::canvas::Canvas;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

/// Rasterizes draw lists into canvases.
///
/// Owns the glyph cache, so reusing one renderer across several screens
/// rasterizes each glyph at each size only once.
pub struct Renderer {
    text: shapes::text::TextRenderer,
}

impl Renderer {
    pub fn new() -> Self {
        Self { text: shapes::text::TextRenderer::new() }
    }

    /// Renders `draw_list` onto `canvas` in paint order.
    pub fn render(&mut self, canvas: &mut Canvas, draw_list: &DrawList, fonts: &FontSystem) {
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Rect(cmd) => shapes::rect::render(canvas, cmd, item.clip_rect),
                DrawCmd::Circle(cmd) => shapes::circle::render(canvas, cmd, item.clip_rect),
                DrawCmd::Arc(cmd) => shapes::arc::render(canvas, cmd, item.clip_rect),
                DrawCmd::Line(cmd) => shapes::line::render(canvas, cmd, item.clip_rect),
                DrawCmd::Text(cmd) => self.text.render(canvas, cmd, item.clip_rect, fonts),
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::shapes::GradientArc;
    use crate::scene::ZIndex;

    const BG: Color = Color::new(20, 21, 38);
    const CYAN_BRIGHT: Color = Color::new(0, 229, 255);
    const PURPLE_BRIGHT: Color = Color::new(191, 90, 242);

    const CENTER: Vec2 = Vec2::new(540.0, 760.0);
    const RADIUS: f32 = 350.0;
    const STROKE: f32 = 50.0;

    /// Pixel on the stroke midline at `deg`, clear of the stroke's AA edges.
    fn sample(canvas: &Canvas, deg: f32) -> Color {
        let mid = RADIUS - STROKE / 2.0;
        let p = CENTER + Vec2::from_angle_deg(deg) * mid;
        canvas.pixel(p.x.round() as i32, p.y.round() as i32).unwrap()
    }

    fn rendered_gauge() -> Canvas {
        let mut list = crate::scene::DrawList::new();
        list.push_gradient_arc(
            ZIndex::new(0),
            GradientArc::new(CENTER, RADIUS, 135.0, 200.0, STROKE, CYAN_BRIGHT, PURPLE_BRIGHT),
        )
        .unwrap();

        let mut canvas = Canvas::new(1080, 1920, BG);
        Renderer::new().render(&mut canvas, &list, &FontSystem::new());
        canvas
    }

    #[test]
    fn gradient_arc_starts_cyan_and_ends_purple() {
        let canvas = rendered_gauge();
        // Inside the first segment (t = 0) and the last (t = 1); the
        // stroke midline has full coverage, so colors are exact.
        assert_eq!(sample(&canvas, 137.0), CYAN_BRIGHT);
        assert_eq!(sample(&canvas, 333.0), PURPLE_BRIGHT);
    }

    #[test]
    fn gradient_arc_transition_is_monotonic() {
        let canvas = rendered_gauge();
        let mut prev = sample(&canvas, 137.0);
        for deg in [150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0] {
            let c = sample(&canvas, deg);
            // Red rises along this gradient; green falls.
            assert!(c.r >= prev.r, "red regressed at {deg}°");
            assert!(c.g <= prev.g, "green regressed at {deg}°");
            prev = c;
        }
    }

    #[test]
    fn pixels_outside_the_sweep_keep_the_background() {
        let canvas = rendered_gauge();
        // 90° is inside the 335°..135° gap of this gauge.
        assert_eq!(sample(&canvas, 90.0), BG);
    }

    #[test]
    fn empty_list_leaves_the_canvas_untouched() {
        let list = crate::scene::DrawList::new();
        let mut canvas = Canvas::new(64, 64, BG);
        Renderer::new().render(&mut canvas, &list, &FontSystem::new());
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(canvas.pixel(x, y), Some(BG));
            }
        }
    }
}
