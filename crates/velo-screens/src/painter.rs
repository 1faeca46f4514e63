use velo_engine::coords::{Rect, Vec2};
use velo_engine::paint::Color;
use velo_engine::scene::shapes::{Border, GradientArc, InvalidGeometry};
use velo_engine::scene::{DrawList, ZIndex};
use velo_engine::text::{FontId, FontSystem};

/// Drawing surface handed to screen parts.
///
/// Wraps the engine's `DrawList` with a high-level API. Every push takes
/// the next z value, so parts layer in call order without tracking z
/// themselves.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a FontSystem) -> Self {
        Self { draw_list, fonts, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` as the renderer will lay it out.
    pub fn measure(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size, None)
    }

    /// X origin that centers `text` within `[0, width)`.
    pub fn centered_x(&self, text: &str, font: FontId, size: f32, width: f32) -> f32 {
        (width - self.measure(text, font, size).x) / 2.0
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Rectangle with optional fill and border.
    pub fn rect(&mut self, rect: Rect, fill: Option<Color>, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, fill, border);
    }

    /// Solid circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_circle(z, center, radius, color);
    }

    /// Outline-only circle.
    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_ring(z, center, radius, width, color);
    }

    /// Solid arc stroke.
    pub fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        width: f32,
        color: Color,
    ) -> Result<(), InvalidGeometry> {
        let z = self.next_z();
        self.draw_list.push_arc(z, center, radius, start_deg, sweep_deg, width, color)
    }

    /// Gradient arc stroke.
    pub fn gradient_arc(&mut self, arc: GradientArc) -> Result<(), InvalidGeometry> {
        let z = self.next_z();
        self.draw_list.push_gradient_arc(z, arc)
    }

    /// Line segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color);
    }

    /// Text at `origin` (top-left of the first line).
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin, None);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::Fonts;

    #[test]
    fn pushes_layer_in_call_order() {
        let fonts = Fonts::load().unwrap();
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &fonts.system);

        p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::new(1, 2, 3));
        p.ring(Vec2::new(5.0, 5.0), 4.0, 1.0, Color::new(4, 5, 6));

        let keys: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(keys, vec![0, 1]);
    }

    #[test]
    fn centered_x_splits_the_margin_evenly() {
        let fonts = Fonts::load().unwrap();
        let mut list = DrawList::new();
        let p = Painter::new(&mut list, &fonts.system);

        let w = p.measure("GO", fonts.bold, 60.0).x;
        let x = p.centered_x("GO", fonts.bold, 60.0, 1080.0);
        assert!((x - (1080.0 - w) / 2.0).abs() < 1e-3);
    }
}
