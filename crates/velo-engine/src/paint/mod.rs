//! Color model shared between the scene and renderers.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
