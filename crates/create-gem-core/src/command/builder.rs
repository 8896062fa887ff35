//! Converts a gem name and options mapping into `bundle gem` arguments
//!
//! No validation happens here; callers validate first.

use crate::options::{OptionKey, OptionKind, OptionMap, OptionValue};

/// Fixed invocation tokens preceding the gem name
pub const BASE_COMMAND: [&str; 2] = ["bundle", "gem"];

/// Build the command tokens, options in registry order
pub fn build(gem_name: &str, options: &OptionMap) -> Vec<String> {
    let mut command: Vec<String> = BASE_COMMAND.iter().map(|s| s.to_string()).collect();
    command.push(gem_name.to_string());

    for key in OptionKey::ALL {
        if let Some(value) = options.get(&key) {
            append_option(&mut command, key, value);
        }
    }

    command
}

fn append_option(command: &mut Vec<String>, key: OptionKey, value: &OptionValue) {
    match (key.definition().kind, value) {
        (OptionKind::Toggle { on, .. }, OptionValue::Bool(true)) => command.push(on.to_string()),
        (OptionKind::Toggle { off, .. }, OptionValue::Bool(false)) => command.push(off.to_string()),
        (OptionKind::Flag { on }, OptionValue::Bool(true)) => command.push(on.to_string()),
        (OptionKind::Enum { flag, .. }, OptionValue::Text(v)) => command.push(format!("{}={}", flag, v)),
        (OptionKind::Enum { none, .. }, OptionValue::Bool(false)) => command.push(none.to_string()),
        (OptionKind::Text { flag }, OptionValue::Text(v)) if !v.is_empty() => {
            command.push(format!("{}={}", flag, v))
        }
        _ => {}
    }
}
