//! Interactive terminal interface
//!
//! Presentation only: renders controller snapshots and turns key presses into
//! session actions.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
