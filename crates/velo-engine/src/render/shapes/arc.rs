use crate::canvas::Canvas;
use crate::coords::Rect;
use crate::render::common::{edge_coverage, pixel_bounds};
use crate::scene::shapes::arc::ArcCmd;

/// Renderer for `DrawCmd::Arc`.
///
/// The stroke spans `[radius - width, radius]` radially. Radial edges
/// are anti-aliased; the angular ends are square-cut (gradient segments
/// overlap by a seam angle, so no seam shows between neighbours).
pub(crate) fn render(canvas: &mut Canvas, cmd: &ArcCmd, clip: Option<Rect>) {
    if cmd.radius <= 0.0 || cmd.width <= 0.0 || cmd.sweep_deg <= 0.0 {
        return;
    }

    let outer = cmd.radius;
    let inner = (cmd.radius - cmd.width).max(0.0);
    let mid = (outer + inner) * 0.5;
    let half = (outer - inner) * 0.5;

    let full_circle = cmd.sweep_deg >= 360.0;
    let start = cmd.start_deg.rem_euclid(360.0);

    let bbox = Rect::new(
        cmd.center.x - outer - 1.0,
        cmd.center.y - outer - 1.0,
        2.0 * outer + 2.0,
        2.0 * outer + 2.0,
    );
    let Some((x0, y0, x1, y1)) = pixel_bounds(canvas, bbox, clip) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cmd.center.x;
            let dy = y as f32 + 0.5 - cmd.center.y;
            let dist = (dx * dx + dy * dy).sqrt();

            // Cheap reject before the atan2.
            if dist > outer + 1.0 || dist < inner - 1.0 {
                continue;
            }

            if !full_circle {
                let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                let rel = (angle - start).rem_euclid(360.0);
                if rel > cmd.sweep_deg {
                    continue;
                }
            }

            canvas.blend(x, y, cmd.color, edge_coverage((dist - mid).abs() - half));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    const BG: Color = Color::new(20, 21, 38);
    const TRACK: Color = Color::new(22, 32, 50);

    fn arc(start_deg: f32, sweep_deg: f32) -> ArcCmd {
        ArcCmd {
            center: Vec2::new(100.0, 100.0),
            radius: 60.0,
            start_deg,
            sweep_deg,
            width: 20.0,
            color: TRACK,
        }
    }

    /// Pixel on the stroke midline at `deg`.
    fn midline(deg: f32) -> (i32, i32) {
        let p = Vec2::new(100.0, 100.0) + Vec2::from_angle_deg(deg) * 50.0;
        (p.x.round() as i32, p.y.round() as i32)
    }

    #[test]
    fn stroke_midline_inside_the_sweep_is_painted() {
        let mut canvas = Canvas::new(200, 200, BG);
        render(&mut canvas, &arc(135.0, 270.0), None);

        for deg in [140.0, 200.0, 270.0, 340.0, 400.0] {
            let (x, y) = midline(deg);
            assert_eq!(canvas.pixel(x, y), Some(TRACK), "expected stroke at {deg}°");
        }
    }

    #[test]
    fn pixels_outside_the_sweep_are_untouched() {
        let mut canvas = Canvas::new(200, 200, BG);
        render(&mut canvas, &arc(135.0, 270.0), None);

        // The gap spans 45°..135°.
        for deg in [60.0, 90.0, 120.0] {
            let (x, y) = midline(deg);
            assert_eq!(canvas.pixel(x, y), Some(BG), "expected background at {deg}°");
        }
    }

    #[test]
    fn pixels_off_the_ring_are_untouched() {
        let mut canvas = Canvas::new(200, 200, BG);
        render(&mut canvas, &arc(0.0, 360.0), None);

        assert_eq!(canvas.pixel(100, 100), Some(BG));
        // Inside the inner edge (dist 30 < 40) and outside the outer (dist 70 > 60).
        assert_eq!(canvas.pixel(130, 100), Some(BG));
        assert_eq!(canvas.pixel(170, 100), Some(BG));
    }

    #[test]
    fn full_circle_sweep_paints_every_angle() {
        let mut canvas = Canvas::new(200, 200, BG);
        render(&mut canvas, &arc(135.0, 360.0), None);

        for deg in [0.0, 90.0, 180.0, 270.0] {
            let (x, y) = midline(deg);
            assert_eq!(canvas.pixel(x, y), Some(TRACK));
        }
    }

    #[test]
    fn zero_sweep_is_a_no_op() {
        let mut canvas = Canvas::new(200, 200, BG);
        render(&mut canvas, &arc(135.0, 0.0), None);
        for y in 0..200 {
            for x in 0..200 {
                assert_eq!(canvas.pixel(x, y), Some(BG));
            }
        }
    }
}
