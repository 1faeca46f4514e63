//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific payloads and push helpers isolated per shape
//!   file under `scene::shapes`
//!
//! Nothing here touches pixels; rasterization happens in `render`. That
//! split is what lets geometry validation reject bad input before the
//! canvas is modified.

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
