//! Velo engine crate.
//!
//! This crate owns the raster pieces used by the screen layer: canvas,
//! scene draw stream, CPU shape renderers, and the text/font stack.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
