//! Geometry types shared across the scene and renderers.
//!
//! Canonical space:
//! - Physical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are degrees, 0° at the +x axis, increasing clockwise (the
//! natural direction in y-down screen space).

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
