use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::render::common::{edge_coverage, pixel_bounds};
use crate::scene::shapes::circle::CircleCmd;

/// Renderer for `DrawCmd::Circle`.
///
/// The fill covers `dist <= radius` with an anti-aliased rim; the border
/// is an AA ring spanning `[radius - width, radius]`, the same inward
/// stroke convention the arc renderer uses.
pub(crate) fn render(canvas: &mut Canvas, cmd: &CircleCmd, clip: Option<Rect>) {
    if cmd.radius <= 0.0 || (cmd.fill.is_none() && cmd.border.is_none()) {
        return;
    }

    let r = cmd.radius;
    let bbox = Rect::new(cmd.center.x - r - 1.0, cmd.center.y - r - 1.0, 2.0 * r + 2.0, 2.0 * r + 2.0);
    let Some((x0, y0, x1, y1)) = pixel_bounds(canvas, bbox, clip) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cmd.center.x;
            let dy = y as f32 + 0.5 - cmd.center.y;
            let dist = (dx * dx + dy * dy).sqrt();

            if let Some(fill) = cmd.fill {
                canvas.blend(x, y, fill, edge_coverage(dist - r));
            }
            if let Some(border) = &cmd.border {
                let half = border.width * 0.5;
                let ring_mid = r - half;
                canvas.blend(x, y, border.color, edge_coverage((dist - ring_mid).abs() - half));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::shapes::Border;

    const BG: Color = Color::new(0, 0, 0);
    const CYAN: Color = Color::new(0, 209, 209);

    #[test]
    fn filled_circle_covers_center_not_corners() {
        let mut canvas = Canvas::new(40, 40, BG);
        let cmd = CircleCmd { center: Vec2::new(20.0, 20.0), radius: 10.0, fill: Some(CYAN), border: None };
        render(&mut canvas, &cmd, None);

        assert_eq!(canvas.pixel(20, 20), Some(CYAN));
        assert_eq!(canvas.pixel(0, 0), Some(BG));
        // Just inside the rim along +x.
        assert_eq!(canvas.pixel(28, 20), Some(CYAN));
        // Well outside the rim.
        assert_eq!(canvas.pixel(33, 20), Some(BG));
    }

    #[test]
    fn ring_leaves_the_interior_empty() {
        let mut canvas = Canvas::new(60, 60, BG);
        let cmd = CircleCmd {
            center: Vec2::new(30.0, 30.0),
            radius: 20.0,
            fill: None,
            border: Some(Border::new(4.0, CYAN)),
        };
        render(&mut canvas, &cmd, None);

        // Stroke midline (radius - width/2 = 18) along +x.
        assert_eq!(canvas.pixel(47, 30), Some(CYAN));
        assert_eq!(canvas.pixel(30, 30), Some(BG));
        assert_eq!(canvas.pixel(58, 30), Some(BG));
    }

    #[test]
    fn non_positive_radius_draws_nothing() {
        let mut canvas = Canvas::new(10, 10, BG);
        let cmd = CircleCmd { center: Vec2::new(5.0, 5.0), radius: 0.0, fill: Some(CYAN), border: None };
        render(&mut canvas, &cmd, None);
        assert_eq!(canvas.pixel(5, 5), Some(BG));
    }
}
