//! Promptdeck TUI - a minimal prompt front-end for the terminal
//!
//! One screen composed of:
//! - Favorites flyout (Ctrl+O) that loads a preset prompt
//! - Prompt bar with a send button (Ctrl+Enter submits)
//! - Read-only content area echoing the current prompt

pub mod app;
pub mod cli;
pub mod effects;
pub mod event;
pub mod terminal;
pub mod tracing_setup;
pub mod ui;

pub use app::{App, Focus};
pub use effects::EffectRunner;
pub use terminal::run;
