//! Shared rasterization helpers.

use crate::canvas::Canvas;
use crate::coords::Rect;

/// Integer pixel bounds `[x0, x1) × [y0, y1)` of `bbox` intersected with
/// the canvas and the item's clip rect. `None` when nothing is visible.
pub(crate) fn pixel_bounds(
    canvas: &Canvas,
    bbox: Rect,
    clip: Option<Rect>,
) -> Option<(i32, i32, i32, i32)> {
    let canvas_rect = Rect::new(0.0, 0.0, canvas.width() as f32, canvas.height() as f32);
    let mut visible = bbox.intersect(canvas_rect)?;
    if let Some(clip) = clip {
        visible = visible.intersect(clip)?;
    }

    let x0 = visible.min().x.floor() as i32;
    let y0 = visible.min().y.floor() as i32;
    let x1 = visible.max().x.ceil() as i32;
    let y1 = visible.max().y.ceil() as i32;

    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Coverage for a signed distance to an edge (positive = outside):
/// 1 inside, 0 outside, linear falloff across one pixel on the edge.
#[inline]
pub(crate) fn edge_coverage(signed_dist: f32) -> f32 {
    (0.5 - signed_dist).clamp(0.0, 1.0)
}
