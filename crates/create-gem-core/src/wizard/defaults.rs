//! Default-choice resolution for each option kind
//!
//! Sources are layered: the value already in the mapping wins, then Bundler's
//! own default, then the registry fallback.

use crate::options::OptionValue;

pub const YES: &str = "yes";
pub const NO: &str = "no";
pub const NONE: &str = "none";
pub const KEEP: &str = "keep";
pub const SET: &str = "set";

pub fn toggle_default(current: Option<&OptionValue>, external: Option<&OptionValue>) -> &'static str {
    match current {
        Some(OptionValue::Bool(true)) => YES,
        Some(OptionValue::Bool(false)) => NO,
        _ => match external {
            Some(OptionValue::Bool(true)) => YES,
            _ => NO,
        },
    }
}

/// One-way flags have no stored "off", so only `true` is meaningful
pub fn flag_default(current: Option<&OptionValue>, external: Option<&OptionValue>) -> &'static str {
    if current == Some(&OptionValue::Bool(true)) || external == Some(&OptionValue::Bool(true)) {
        YES
    } else {
        NO
    }
}

/// `allowed` is the compatibility entry's value list, without `none`
pub fn enum_default(
    current: Option<&OptionValue>,
    external: Option<&OptionValue>,
    allowed: &[&str],
) -> String {
    let legal = |value: &OptionValue| match value {
        OptionValue::Text(s) if allowed.contains(&s.as_str()) => Some(s.clone()),
        _ => None,
    };

    if let Some(value) = current.and_then(legal) {
        return value;
    }
    if current == Some(&OptionValue::Bool(false)) {
        return NONE.to_string();
    }
    if let Some(value) = external.and_then(legal) {
        return value;
    }
    if external == Some(&OptionValue::Bool(false)) {
        return NONE.to_string();
    }

    allowed.first().copied().unwrap_or(NONE).to_string()
}

/// Stored non-empty text, if any
pub fn stored_text(current: Option<&OptionValue>) -> Option<&str> {
    match current {
        Some(OptionValue::Text(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Choices and default for a free-text option
pub fn text_choices(current: Option<&OptionValue>) -> (Vec<&'static str>, &'static str) {
    if stored_text(current).is_some() {
        (vec![KEEP, SET], KEEP)
    } else {
        (vec![SET, NONE], NONE)
    }
}

/// Move `default` to the front, keeping the rest in their original order
pub fn reorder_default_first(choices: &[String], default: &str) -> Vec<String> {
    if !choices.iter().any(|c| c == default) {
        return choices.to_vec();
    }

    let mut ordered = vec![default.to_string()];
    ordered.extend(choices.iter().filter(|c| *c != default).cloned());
    ordered
}
