//! Logging utilities.
//!
//! Centralizes logger initialization so binaries get consistent behavior
//! from one call. Everything else in the workspace logs through the
//! standard `log` facade.

mod init;

pub use init::init_logging;
