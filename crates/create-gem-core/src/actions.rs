//! Non-interactive actions: `--doctor` and preset management

use crate::compatibility;
use crate::config::Store;
use crate::detection::RuntimeVersions;
use crate::error::{Error, Result};
use std::io::Write;

/// Print detected versions and the options the detected Bundler supports.
/// Versions are printed even when the Bundler version is unsupported.
pub fn doctor<W: Write>(out: &mut W, runtime: &RuntimeVersions) -> Result<()> {
    for (name, version) in runtime.entries() {
        writeln!(out, "{}: {}", name, version)?;
    }

    let entry = compatibility::resolve(&runtime.bundler)?;
    let options: Vec<&str> = entry
        .supported_keys()
        .iter()
        .map(|key| key.as_str())
        .collect();
    writeln!(out, "supported options: {}", options.join(", "))?;
    Ok(())
}

pub fn list_presets<W: Write>(out: &mut W, store: &Store) -> Result<()> {
    for name in store.preset_names()? {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Print a preset's name followed by its sorted `key: value` lines
pub fn show_preset<W: Write>(out: &mut W, store: &Store, name: &str) -> Result<()> {
    let preset = store
        .preset(name)?
        .ok_or_else(|| Error::Validation(format!("Preset not found: {}", name)))?;

    writeln!(out, "{}", name)?;
    for (key, value) in &preset {
        writeln!(out, "  {}: {}", key, display_yaml(value))?;
    }
    Ok(())
}

pub fn delete_preset(store: &Store, name: &str) -> Result<()> {
    store.delete_preset(name)
}

fn display_yaml(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "nil".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::String(s) => format!("{:?}", s),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionKey, OptionMap, OptionValue};
    use semver::Version;
    use tempfile::TempDir;

    fn runtime(bundler: Version) -> RuntimeVersions {
        RuntimeVersions {
            ruby: Some(Version::new(3, 3, 0)),
            rubygems: None,
            bundler,
        }
    }

    #[test]
    fn test_doctor_lists_supported_options() {
        let mut out = Vec::new();
        doctor(&mut out, &runtime(Version::new(2, 5, 0))).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ruby: 3.3.0\nrubygems: unknown\nbundler: 2.5.0\n\
             supported options: exe, coc, ext, git, github_username, mit, test, ci, edit, bundle_install\n"
        );
    }

    #[test]
    fn test_doctor_unsupported_bundler() {
        let mut out = Vec::new();
        let err = doctor(&mut out, &runtime(Version::new(1, 17, 3))).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { .. }));
        assert!(String::from_utf8(out).unwrap().contains("bundler: 1.17.3"));
    }

    #[test]
    fn test_show_preset() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("config.yml"));
        let options = OptionMap::from([
            (OptionKey::Test, OptionValue::text("rspec")),
            (OptionKey::Exe, OptionValue::Bool(true)),
        ]);
        store.save_preset("work", &options).unwrap();

        let mut out = Vec::new();
        show_preset(&mut out, &store, "work").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "work\n  exe: true\n  test: \"rspec\"\n"
        );
    }

    #[test]
    fn test_show_missing_preset() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("config.yml"));
        let err = show_preset(&mut Vec::new(), &store, "ghost").unwrap_err();
        assert_eq!(err.to_string(), "Preset not found: ghost");
    }

    #[test]
    fn test_list_and_delete_presets() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("config.yml"));
        store.save_preset("b", &OptionMap::new()).unwrap();
        store.save_preset("a", &OptionMap::new()).unwrap();
        delete_preset(&store, "b").unwrap();

        let mut out = Vec::new();
        list_presets(&mut out, &store).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n");
    }
}
