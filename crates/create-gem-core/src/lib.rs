//! create-gem core - option selection and command assembly for `bundle gem`
//!
//! This library walks a user through the options of `bundle gem`, restricted to
//! what the installed Bundler version supports, and produces the exact argument
//! list to execute.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core pipeline** - Option registry, compatibility table, validator,
//!   selection session and command builder. Pure apart from the `Prompter` trait.
//! - **Layer 2: Collaborators** - Version detection, Bundler's own defaults, the
//!   preset store and the command runner
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use create_gem_core::{command, compatibility, options};
//!
//! let entry = compatibility::resolve(&semver::Version::new(3, 1, 0))?;
//! let mut selected = options::OptionMap::new();
//! selected.insert(options::OptionKey::Exe, true.into());
//! selected.insert(options::OptionKey::Test, "rspec".into());
//!
//! options::validate("my_gem", &selected, entry)?;
//! let argv = command::build("my_gem", &selected);
//! // ["bundle", "gem", "my_gem", "--exe", "--test=rspec"]
//! ```

pub mod actions;
pub mod command;
pub mod compatibility;
pub mod config;
pub mod detection;
pub mod error;
pub mod options;
pub mod runner;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Store;
pub use error::{Error, Result};
pub use options::{OptionKey, OptionMap, OptionValue};
pub use wizard::{Prompt, Prompter, Session};

#[cfg(feature = "tui")]
pub use tui::run;
