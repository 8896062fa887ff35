//! Validates a gem name and selected options against the registry and the
//! compatibility entry for the detected Bundler version

use super::catalog::{OptionKey, OptionKind};
use super::value::{from_yaml, OptionMap, OptionValue, RawOptions};
use crate::compatibility::Entry;
use crate::error::{Error, Result};

/// Gem names start with an ASCII letter, followed by letters, digits, `_` or `-`
pub fn is_valid_gem_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

fn validate_gem_name(gem_name: &str) -> Result<()> {
    if is_valid_gem_name(gem_name) {
        Ok(())
    } else {
        Err(Error::Validation(format!("Invalid gem name: {:?}", gem_name)))
    }
}

fn validate_supported_option(key: OptionKey, entry: &Entry) -> Result<()> {
    if entry.supports(key) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "Option {} is not supported by this bundler version",
            key
        )))
    }
}

fn validate_value(key: OptionKey, value: &OptionValue) -> Result<()> {
    let valid = match (key.definition().kind, value) {
        (OptionKind::Toggle { .. } | OptionKind::Flag { .. }, OptionValue::Bool(_)) => true,
        (OptionKind::Enum { .. }, OptionValue::Bool(b)) => !b,
        (OptionKind::Enum { values, .. }, OptionValue::Text(s)) => values.contains(&s.as_str()),
        (OptionKind::Text { .. }, OptionValue::Text(_)) => true,
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::Validation(format!("Invalid value for {}: {}", key, value)))
    }
}

fn validate_supported_value(key: OptionKey, value: &OptionValue, entry: &Entry) -> Result<()> {
    let OptionValue::Text(text) = value else {
        return Ok(());
    };
    if !matches!(key.definition().kind, OptionKind::Enum { .. }) {
        return Ok(());
    }

    match entry.allowed_values(key)? {
        Some(allowed) if !allowed.contains(&text.as_str()) => Err(Error::Validation(format!(
            "Value {:?} for {} is not supported by this bundler version",
            text, key
        ))),
        _ => Ok(()),
    }
}

fn validate_entry(key: OptionKey, value: &OptionValue, entry: &Entry) -> Result<()> {
    validate_supported_option(key, entry)?;
    validate_value(key, value)?;
    validate_supported_value(key, value, entry)
}

/// Validate a typed options mapping. Fails on the first problem found.
pub fn validate(gem_name: &str, options: &OptionMap, entry: &Entry) -> Result<()> {
    validate_gem_name(gem_name)?;

    for (key, value) in options {
        validate_entry(*key, value, entry)?;
    }

    Ok(())
}

/// Validate untyped options (e.g. a saved preset) and convert them into a
/// typed mapping. `null` values count as absent and are dropped.
pub fn validate_raw(gem_name: &str, options: &RawOptions, entry: &Entry) -> Result<OptionMap> {
    validate_gem_name(gem_name)?;

    let mut typed = OptionMap::new();
    for (name, raw) in options {
        let key: OptionKey = name
            .parse()
            .map_err(|_| Error::Validation(format!("Unknown option: {}", name)))?;
        validate_supported_option(key, entry)?;

        if raw.is_null() {
            continue;
        }
        let value = from_yaml(raw).ok_or_else(|| {
            Error::Validation(format!(
                "Invalid value for {}: {}",
                key,
                serde_yaml::to_string(raw)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            ))
        })?;

        validate_value(key, &value)?;
        validate_supported_value(key, &value, entry)?;
        typed.insert(key, value);
    }

    Ok(typed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility;
    use semver::Version;

    fn entry(version: &str) -> &'static Entry {
        compatibility::resolve(&Version::parse(version).unwrap()).unwrap()
    }

    fn options(pairs: &[(OptionKey, OptionValue)]) -> OptionMap {
        pairs.iter().cloned().collect()
    }

    fn message(result: Result<()>) -> String {
        match result {
            Err(Error::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_valid_selection() {
        let opts = options(&[
            (OptionKey::Exe, true.into()),
            (OptionKey::Test, "rspec".into()),
            (OptionKey::Ci, false.into()),
            (OptionKey::GithubUsername, "octocat".into()),
        ]);
        assert!(validate("my_gem", &opts, entry("3.1.0")).is_ok());
    }

    #[test]
    fn test_gem_name_pattern() {
        assert!(is_valid_gem_name("demo"));
        assert!(is_valid_gem_name("My-gem_2"));
        assert!(!is_valid_gem_name(""));
        assert!(!is_valid_gem_name("2fast"));
        assert!(!is_valid_gem_name("_hidden"));
        assert!(!is_valid_gem_name("has space"));
        assert!(!is_valid_gem_name("dot.ted"));
    }

    #[test]
    fn test_invalid_gem_name_checked_first() {
        let opts = options(&[(OptionKey::Linter, "rubocop".into())]);
        let msg = message(validate("1bad", &opts, entry("2.5.0")));
        assert_eq!(msg, "Invalid gem name: \"1bad\"");
    }

    #[test]
    fn test_unsupported_option_regardless_of_value() {
        for value in [OptionValue::Bool(true), OptionValue::Bool(false), "rubocop".into()] {
            let opts = options(&[(OptionKey::Linter, value)]);
            let msg = message(validate("demo", &opts, entry("2.5.0")));
            assert_eq!(msg, "Option linter is not supported by this bundler version");
        }
    }

    #[test]
    fn test_shape_mismatches() {
        let cases = [
            (OptionKey::Exe, OptionValue::text("yes")),
            (OptionKey::Git, OptionValue::text("true")),
            (OptionKey::Test, OptionValue::Bool(true)),
            (OptionKey::Test, OptionValue::text("cucumber")),
            (OptionKey::Edit, OptionValue::Bool(false)),
        ];
        for (key, value) in cases {
            let opts = options(&[(key, value)]);
            let msg = message(validate("demo", &opts, entry("3.1.0")));
            assert!(msg.starts_with(&format!("Invalid value for {}", key)), "{msg}");
        }
    }

    #[test]
    fn test_value_outside_row_subset() {
        let opts = options(&[(OptionKey::Ext, "rust".into())]);
        let msg = message(validate("demo", &opts, entry("3.1.0")));
        assert_eq!(
            msg,
            "Value \"rust\" for ext is not supported by this bundler version"
        );
        assert!(validate("demo", &opts, entry("4.0.0")).is_ok());
    }

    #[test]
    fn test_enum_false_is_always_allowed() {
        let opts = options(&[(OptionKey::Ext, false.into())]);
        assert!(validate("demo", &opts, entry("2.4.0")).is_ok());
    }

    #[test]
    fn test_raw_unknown_option() {
        let raw: RawOptions = serde_yaml::from_str("frobnicate: true").unwrap();
        let err = validate_raw("demo", &raw, entry("3.1.0")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown option: frobnicate");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_raw_converts_and_drops_nulls() {
        let raw: RawOptions =
            serde_yaml::from_str("exe: true\ntest: minitest\nedit: null\n").unwrap();
        let typed = validate_raw("demo", &raw, entry("3.1.0")).unwrap();
        assert_eq!(typed.len(), 2);
        assert_eq!(typed[&OptionKey::Test], OptionValue::text("minitest"));
    }

    #[test]
    fn test_raw_rejects_non_scalar_values() {
        let raw: RawOptions = serde_yaml::from_str("ci: [github]").unwrap();
        let err = validate_raw("demo", &raw, entry("3.1.0")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for ci"));
    }

    #[test]
    fn test_raw_unsupported_option() {
        let raw: RawOptions = serde_yaml::from_str("changelog: true").unwrap();
        let err = validate_raw("demo", &raw, entry("2.6.0")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Option changelog is not supported by this bundler version"
        );
    }
}
