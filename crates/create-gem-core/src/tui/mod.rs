//! Terminal front-end using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod app;
pub mod palette;
mod prompter;

pub use app::{is_interrupted, run, CreateArgs};
pub use prompter::CliclackPrompter;
