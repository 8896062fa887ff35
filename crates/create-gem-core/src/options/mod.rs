//! Option registry, selection values and validation

pub mod catalog;
pub mod validator;
pub mod value;

pub use catalog::{definition, lookup, ordered_keys, OptionDefinition, OptionKey, OptionKind};
pub use validator::{validate, validate_raw};
pub use value::{OptionMap, OptionValue, RawOptions};
