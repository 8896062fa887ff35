//! Detection of the installed Ruby toolchain and Bundler's gem defaults
//!
//! This module provides:
//! - Bundler version detection (`bundle --version`)
//! - Ruby and RubyGems versions for the summary and `--doctor`
//! - Bundler's own `gem.*` settings, used as the wizard's second default source

pub mod bundler_defaults;
pub mod bundler_version;
pub mod runtime;

pub use bundler_defaults::BundlerDefaults;
pub use bundler_version::{detect_bundler_version, parse_version_output};
pub use runtime::{detect_runtime, RuntimeVersions};
