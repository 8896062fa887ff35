//! Bundler's own defaults for `bundle gem`
//!
//! Bundler reads `gem.*` settings from its global config file and from
//! `BUNDLE_GEM__*` environment variables. Those settings are the wizard's
//! second-priority default source.

use crate::options::{OptionKey, OptionMap, OptionValue};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Defaults Bundler applies when a setting is absent
const FALLBACKS: &[(OptionKey, bool)] = &[
    (OptionKey::Exe, false),
    (OptionKey::Ext, false),
    (OptionKey::Git, true),
    (OptionKey::BundleInstall, false),
];

/// Options Bundler lets users configure through `gem.*` settings
const CONFIGURABLE: &[OptionKey] = &[
    OptionKey::Coc,
    OptionKey::Changelog,
    OptionKey::Ext,
    OptionKey::Git,
    OptionKey::GithubUsername,
    OptionKey::Mit,
    OptionKey::Test,
    OptionKey::Ci,
    OptionKey::Linter,
];

/// Raw Bundler settings keyed by their `BUNDLE_*` name
#[derive(Debug, Clone, Default)]
pub struct BundlerDefaults {
    settings: BTreeMap<String, String>,
}

/// `gem.test` is stored as `BUNDLE_GEM__TEST`
fn setting_name(key: OptionKey) -> String {
    format!("BUNDLE_GEM__{}", key.as_str().to_uppercase())
}

fn normalize(value: &str) -> OptionValue {
    match value {
        "true" => OptionValue::Bool(true),
        "false" => OptionValue::Bool(false),
        other => OptionValue::text(other),
    }
}

impl BundlerDefaults {
    pub fn from_settings(settings: BTreeMap<String, String>) -> Self {
        Self { settings }
    }

    /// Read the global Bundler config file, then let the process environment
    /// override it. Unreadable files are ignored.
    pub fn load() -> Self {
        let mut defaults = match global_config_path() {
            Some(path) => Self::from_config_file(&path),
            None => Self::default(),
        };
        defaults.merge_env(std::env::vars());
        defaults
    }

    pub fn from_config_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no bundler config");
                return Self::default();
            }
        };

        let raw: BTreeMap<String, serde_yaml::Value> = match serde_yaml::from_str(&content) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable bundler config");
                return Self::default();
            }
        };

        let settings = raw
            .into_iter()
            .filter_map(|(name, value)| match value {
                serde_yaml::Value::String(s) => Some((name, s)),
                serde_yaml::Value::Bool(b) => Some((name, b.to_string())),
                _ => None,
            })
            .collect();
        Self { settings }
    }

    /// Overlay `BUNDLE_GEM__*` variables
    pub fn merge_env(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (name, value) in vars {
            if name.starts_with("BUNDLE_GEM__") {
                self.settings.insert(name, value);
            }
        }
    }

    /// Bundler's effective default per option; absent keys have no default
    pub fn detect(&self) -> OptionMap {
        let mut defaults: OptionMap = FALLBACKS
            .iter()
            .map(|(key, value)| (*key, OptionValue::Bool(*value)))
            .collect();

        for key in CONFIGURABLE {
            if let Some(value) = self.settings.get(&setting_name(*key)) {
                defaults.insert(*key, normalize(value));
            }
        }

        defaults
    }
}

/// `$BUNDLE_USER_CONFIG`, `$BUNDLE_USER_HOME/config`, or `~/.bundle/config`
fn global_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("BUNDLE_USER_CONFIG") {
        return Some(PathBuf::from(path));
    }
    if let Some(home) = std::env::var_os("BUNDLE_USER_HOME") {
        return Some(PathBuf::from(home).join("config"));
    }
    dirs::home_dir().map(|home| home.join(".bundle").join("config"))
}
