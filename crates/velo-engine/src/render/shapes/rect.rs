use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::paint::Color;
use crate::render::common::pixel_bounds;
use crate::scene::shapes::rect::RectCmd;

/// Renderer for `DrawCmd::Rect`.
///
/// Axis-aligned fills need no anti-aliasing; the border is drawn as four
/// edge strips just inside the rectangle.
pub(crate) fn render(canvas: &mut Canvas, cmd: &RectCmd, clip: Option<Rect>) {
    let rect = cmd.rect.normalized();
    if rect.is_empty() {
        return;
    }

    if let Some(fill) = cmd.fill {
        fill_region(canvas, rect, clip, fill);
    }

    if let Some(border) = &cmd.border {
        let w = border.width.max(1.0);
        let (x, y) = (rect.origin.x, rect.origin.y);
        let (rw, rh) = (rect.size.x, rect.size.y);

        fill_region(canvas, Rect::new(x, y, rw, w), clip, border.color); // top
        fill_region(canvas, Rect::new(x, y + rh - w, rw, w), clip, border.color); // bottom
        fill_region(canvas, Rect::new(x, y, w, rh), clip, border.color); // left
        fill_region(canvas, Rect::new(x + rw - w, y, w, rh), clip, border.color); // right
    }
}

fn fill_region(canvas: &mut Canvas, region: Rect, clip: Option<Rect>, color: Color) {
    let Some((x0, y0, x1, y1)) = pixel_bounds(canvas, region, clip) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shapes::Border;

    const BG: Color = Color::new(0, 0, 0);
    const FILL: Color = Color::new(30, 31, 51);
    const EDGE: Color = Color::new(22, 32, 50);

    #[test]
    fn fill_covers_the_rect_and_nothing_else() {
        let mut canvas = Canvas::new(20, 20, BG);
        let cmd = RectCmd { rect: Rect::new(5.0, 5.0, 10.0, 8.0), fill: Some(FILL), border: None };
        render(&mut canvas, &cmd, None);

        assert_eq!(canvas.pixel(5, 5), Some(FILL));
        assert_eq!(canvas.pixel(14, 12), Some(FILL));
        assert_eq!(canvas.pixel(4, 5), Some(BG));
        assert_eq!(canvas.pixel(15, 12), Some(BG));
    }

    #[test]
    fn border_strips_sit_inside_the_rect() {
        let mut canvas = Canvas::new(20, 20, BG);
        let cmd = RectCmd {
            rect: Rect::new(2.0, 2.0, 16.0, 16.0),
            fill: Some(FILL),
            border: Some(Border::new(1.0, EDGE)),
        };
        render(&mut canvas, &cmd, None);

        assert_eq!(canvas.pixel(2, 2), Some(EDGE));
        assert_eq!(canvas.pixel(17, 17), Some(EDGE));
        assert_eq!(canvas.pixel(10, 2), Some(EDGE));
        assert_eq!(canvas.pixel(10, 10), Some(FILL));
        assert_eq!(canvas.pixel(1, 1), Some(BG));
    }

    #[test]
    fn clip_suppresses_out_of_rect_pixels() {
        let mut canvas = Canvas::new(20, 20, BG);
        let cmd = RectCmd { rect: Rect::new(0.0, 0.0, 20.0, 20.0), fill: Some(FILL), border: None };
        render(&mut canvas, &cmd, Some(Rect::new(0.0, 0.0, 10.0, 20.0)));

        assert_eq!(canvas.pixel(9, 10), Some(FILL));
        assert_eq!(canvas.pixel(10, 10), Some(BG));
    }
}
