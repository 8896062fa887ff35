//! Persisted presets and last-used options

pub mod store;

pub use store::{ConfigFile, Store};
