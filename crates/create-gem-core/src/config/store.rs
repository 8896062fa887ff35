//! YAML-backed store for presets and the last-used selection
//!
//! The file lives at `$XDG_CONFIG_HOME/create-gem/config.yml` (falling back to
//! `~/.config`). Every write replaces the file atomically.

use crate::error::{Error, Result};
use crate::options::value::{to_raw, OptionMap, RawOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;

/// On-disk layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub last_used: RawOptions,

    #[serde(default)]
    pub presets: BTreeMap<String, RawOptions>,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            last_used: RawOptions::new(),
            presets: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location
    pub fn open_default() -> Result<Self> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| Error::Config {
                path: PathBuf::from("~/.config"),
                message: "cannot determine home directory".to_string(),
            })?;
        Ok(Self::new(config_home.join("create-gem").join("config.yml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        if !self.path.is_file() {
            return Ok(ConfigFile::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&content).map_err(|e| Error::Config {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    pub fn last_used(&self) -> Result<RawOptions> {
        Ok(self.load()?.last_used)
    }

    pub fn save_last_used(&self, options: &OptionMap) -> Result<()> {
        let mut data = self.load()?;
        data.last_used = to_raw(options);
        self.write(&data)
    }

    pub fn preset(&self, name: &str) -> Result<Option<RawOptions>> {
        Ok(self.load()?.presets.remove(name))
    }

    /// Preset names, sorted
    pub fn preset_names(&self) -> Result<Vec<String>> {
        Ok(self.load()?.presets.into_keys().collect())
    }

    pub fn save_preset(&self, name: &str, options: &OptionMap) -> Result<()> {
        let mut data = self.load()?;
        data.presets.insert(name.to_string(), to_raw(options));
        self.write(&data)
    }

    /// Deleting a missing preset is not an error
    pub fn delete_preset(&self, name: &str) -> Result<()> {
        let mut data = self.load()?;
        data.presets.remove(name);
        self.write(&data)
    }

    fn write(&self, data: &ConfigFile) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let yaml = serde_yaml::to_string(data).map_err(|e| Error::Config {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let mut tmp = tempfile::Builder::new()
            .prefix("create-gem")
            .suffix(".yml")
            .tempfile_in(dir)?;
        tmp.write_all(yaml.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!(path = %self.path.display(), "wrote config");
        Ok(())
    }
}
