use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::render::common::{edge_coverage, pixel_bounds};
use crate::scene::shapes::line::LineCmd;

/// Renderer for `DrawCmd::Line`: a thick segment with AA edges.
///
/// Coverage comes from the distance between the pixel center and the
/// segment, so caps are round.
pub(crate) fn render(canvas: &mut Canvas, cmd: &LineCmd, clip: Option<Rect>) {
    if cmd.width <= 0.0 {
        return;
    }

    let half = cmd.width * 0.5;
    let pad = half + 1.0;
    let min_x = cmd.from.x.min(cmd.to.x) - pad;
    let min_y = cmd.from.y.min(cmd.to.y) - pad;
    let max_x = cmd.from.x.max(cmd.to.x) + pad;
    let max_y = cmd.from.y.max(cmd.to.y) + pad;

    let bbox = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);
    let Some((x0, y0, x1, y1)) = pixel_bounds(canvas, bbox, clip) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let dist = segment_distance(p, cmd.from, cmd.to);
            canvas.blend(x, y, cmd.color, edge_coverage(dist - half));
        }
    }
}

/// Distance from `p` to the segment `a`..`b`.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;

    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0)
    };

    let closest = a + ab * t;
    let d = p - closest;
    (d.x * d.x + d.y * d.y).sqrt()
}
