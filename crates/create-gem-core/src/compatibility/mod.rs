//! Bundler version compatibility
//!
//! Which options (and which enumerated values) each Bundler release line
//! accepts for `bundle gem`.

pub mod matrix;

pub use matrix::{resolve, resolve_in, supported_ranges, Allowed, Entry, TABLE};
