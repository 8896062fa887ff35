//! Per-option selection values

use super::catalog::OptionKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A decided option value
///
/// `Bool(false)` means "explicitly suppress"; an absent key means "let
/// Bundler decide". The two are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl OptionValue {
    pub fn text(value: impl Into<String>) -> Self {
        OptionValue::Text(value.into())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s.as_str()),
            OptionValue::Bool(_) => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Final options mapping: only keys the user decided on
pub type OptionMap = BTreeMap<OptionKey, OptionValue>;

/// Untyped options as read back from YAML (presets, last-used)
pub type RawOptions = BTreeMap<String, serde_yaml::Value>;

/// Interpret a raw YAML value as an option value, if it has a usable shape
pub fn from_yaml(value: &serde_yaml::Value) -> Option<OptionValue> {
    match value {
        serde_yaml::Value::Bool(b) => Some(OptionValue::Bool(*b)),
        serde_yaml::Value::String(s) => Some(OptionValue::Text(s.clone())),
        _ => None,
    }
}

/// Convert raw options into a typed map, dropping unknown keys and values of
/// the wrong shape. Used for wizard seeds, which are advisory.
pub fn parse_lenient(raw: &RawOptions) -> OptionMap {
    raw.iter()
        .filter_map(|(name, value)| {
            let key = name.parse::<OptionKey>().ok()?;
            Some((key, from_yaml(value)?))
        })
        .collect()
}

/// Convert a typed map back into raw YAML form for persistence
pub fn to_raw(options: &OptionMap) -> RawOptions {
    options
        .iter()
        .map(|(key, value)| {
            let yaml = match value {
                OptionValue::Bool(b) => serde_yaml::Value::Bool(*b),
                OptionValue::Text(s) => serde_yaml::Value::String(s.clone()),
            };
            (key.as_str().to_string(), yaml)
        })
        .collect()
}
