//! Screen composition layer for the speed-test mock-ups.
//!
//! Each screen is a plain function that records draw commands through
//! [`Painter`]; [`render_screen`] turns a [`ScreenKind`] into encoded
//! PNG bytes. File IO stays with the caller.

pub mod fonts;
pub mod painter;
pub mod parts;
pub mod screen;
pub mod theme;

mod screens;

pub use fonts::Fonts;
pub use painter::Painter;
pub use screen::{render_screen, ScreenError, ScreenKind};
