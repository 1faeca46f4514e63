//! Text stack: font storage, measurement, and family resolution.
//!
//! Fonts are resolved to raw bytes once at startup (see [`resolve_family`])
//! and parsed into a [`FontSystem`]; draw commands then reference faces by
//! [`FontId`]. There is no global font state.

mod font_system;
mod resolve;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use resolve::{builtin_bold, builtin_regular, resolve_family, FontUnavailable};
