use std::fmt;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Default segment count for gradient arcs.
pub const GRADIENT_SEGMENTS: u32 = 50;

/// Default angle added past each segment's nominal end so neighbouring
/// segments overlap and anti-aliasing seams stay closed. Tunable; chosen
/// by visual inspection.
pub const SEAM_OVERLAP_DEG: f32 = 1.0;

/// Solid arc draw payload.
///
/// Angles are degrees, 0° at the +x axis, increasing clockwise. The
/// stroke spans `[radius - width, radius]` radially.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub width: f32,
    pub color: Color,
}

/// A ring-shaped arc whose color fades from `start_color` to `end_color`
/// along the sweep: N contiguous equal-angle sub-arcs with evenly
/// interpolated solid colors, since the raster layer only strokes
/// solid-color arcs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientArc {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub width: f32,
    pub start_color: Color,
    pub end_color: Color,
    pub segments: u32,
    pub seam_overlap_deg: f32,
}

impl GradientArc {
    pub fn new(
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        width: f32,
        start_color: Color,
        end_color: Color,
    ) -> Self {
        Self {
            center,
            radius,
            start_deg,
            sweep_deg,
            width,
            start_color,
            end_color,
            segments: GRADIENT_SEGMENTS,
            seam_overlap_deg: SEAM_OVERLAP_DEG,
        }
    }

    pub fn segments(mut self, n: u32) -> Self {
        self.segments = n;
        self
    }

    pub fn seam_overlap(mut self, deg: f32) -> Self {
        self.seam_overlap_deg = deg;
        self
    }
}

/// Rejected draw-call geometry.
///
/// Raised before any command is recorded, so a failed push leaves the
/// draw list (and therefore the canvas) untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidGeometry {
    pub message: String,
}

impl InvalidGeometry {
    fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arc geometry: {}", self.message)
    }
}

impl std::error::Error for InvalidGeometry {}

fn check_stroke(center: Vec2, radius: f32, width: f32, sweep_deg: f32) -> Result<(), InvalidGeometry> {
    if !center.is_finite() {
        return Err(InvalidGeometry::new(format!(
            "center must be finite, got ({}, {})",
            center.x, center.y
        )));
    }
    if radius <= 0.0 || !radius.is_finite() {
        return Err(InvalidGeometry::new(format!("radius must be positive and finite, got {radius}")));
    }
    if width <= 0.0 || !width.is_finite() {
        return Err(InvalidGeometry::new(format!("stroke width must be positive and finite, got {width}")));
    }
    if sweep_deg < 0.0 || !sweep_deg.is_finite() {
        return Err(InvalidGeometry::new(format!("sweep angle must be non-negative and finite, got {sweep_deg}")));
    }
    Ok(())
}

impl DrawList {
    /// Records a solid arc stroke.
    ///
    /// A zero sweep records nothing and returns `Ok`. Non-positive or
    /// non-finite radius/width is rejected before anything is recorded.
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        width: f32,
        color: Color,
    ) -> Result<(), InvalidGeometry> {
        check_stroke(center, radius, width, sweep_deg)?;
        if sweep_deg == 0.0 {
            return Ok(());
        }
        self.push(z, DrawCmd::Arc(ArcCmd { center, radius, start_deg, sweep_deg, width, color }));
        Ok(())
    }

    /// Records a gradient arc as `arc.segments` overlapping solid
    /// sub-arcs with evenly interpolated colors.
    ///
    /// Segment `i` covers `[start + i·step, start + (i+1)·step + overlap]`
    /// where `step = sweep / segments`; its color is
    /// `start_color.lerp(end_color, i / (segments - 1))`, so the first
    /// segment is exactly the start color and the last exactly the end
    /// color. A single segment degenerates to the start color.
    ///
    /// A zero sweep records nothing and returns `Ok`. Zero segments,
    /// like any other non-positive dimension, is rejected up front;
    /// the step would otherwise divide by zero.
    pub fn push_gradient_arc(&mut self, z: ZIndex, arc: GradientArc) -> Result<(), InvalidGeometry> {
        check_stroke(arc.center, arc.radius, arc.width, arc.sweep_deg)?;
        if arc.segments == 0 {
            return Err(InvalidGeometry::new("segment count must be at least 1"));
        }
        if arc.seam_overlap_deg < 0.0 || !arc.seam_overlap_deg.is_finite() {
            return Err(InvalidGeometry::new(format!(
                "seam overlap must be non-negative and finite, got {}",
                arc.seam_overlap_deg
            )));
        }
        if arc.sweep_deg == 0.0 {
            return Ok(());
        }

        let n = arc.segments;
        let step = arc.sweep_deg / n as f32;
        for i in 0..n {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            let color = arc.start_color.lerp(arc.end_color, t);
            self.push(z, DrawCmd::Arc(ArcCmd {
                center: arc.center,
                radius: arc.radius,
                start_deg: arc.start_deg + step * i as f32,
                sweep_deg: step + arc.seam_overlap_deg,
                width: arc.width,
                color,
            }));
        }
        Ok(())
    }
}
