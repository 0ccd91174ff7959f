//! Interactive TUI
//!
//! Human-in-the-loop play: the player keeps the secret and enters a verdict
//! for each suggested guess.

mod app;
mod rendering;

pub use app::{App, InputMode, MessageStyle, run_tui};
