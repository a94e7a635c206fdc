//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (repeating timers)
//! - Canvas drawing and keyboard events (web only)

pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use time::{ManualTimer, Timer};
