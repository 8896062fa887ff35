//! `bundle gem` command assembly

pub mod builder;

pub use builder::{build, BASE_COMMAND};
