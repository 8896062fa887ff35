//! Static lookup table from Bundler version ranges to the `bundle gem`
//! options each range supports

use crate::error::{Error, Result};
use crate::options::OptionKey;
use semver::Version;
use std::fmt;

/// Allowed values for an option within a row: `None` accepts anything legal
/// for the option's kind, `Some` restricts enumerated options to a subset.
pub type Allowed = Option<&'static [&'static str]>;

/// A single row: the half-open range `[min, max)` and its supported options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub min: Version,
    pub max: Version,
    pub options: &'static [(OptionKey, Allowed)],
}

impl Entry {
    pub const fn new(min: Version, max: Version, options: &'static [(OptionKey, Allowed)]) -> Self {
        Self { min, max, options }
    }

    pub fn matches(&self, version: &Version) -> bool {
        *version >= self.min && *version < self.max
    }

    pub fn supports(&self, key: OptionKey) -> bool {
        self.options.iter().any(|(k, _)| *k == key)
    }

    /// Allowed values for `key`. Callers must check `supports` first.
    pub fn allowed_values(&self, key: OptionKey) -> Result<Allowed> {
        self.options
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, allowed)| *allowed)
            .ok_or_else(|| {
                Error::Internal(format!("option {} is not part of this compatibility entry", key))
            })
    }

    /// Supported keys in registry order
    pub fn supported_keys(&self) -> Vec<OptionKey> {
        OptionKey::ALL
            .iter()
            .copied()
            .filter(|key| self.supports(*key))
            .collect()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ">= {}.{}, < {}.{}",
            self.min.major, self.min.minor, self.max.major, self.max.minor
        )
    }
}

const EXT_C: &[&str] = &["c"];
const EXT_ALL: &[&str] = &["c", "go", "rust"];
const TEST_FRAMEWORKS: &[&str] = &["minitest", "rspec", "test-unit"];
const CI_PROVIDERS: &[&str] = &["circle", "github", "gitlab"];
const LINTERS: &[&str] = &["rubocop", "standard"];

/// Known Bundler versions, oldest first. Ranges must not overlap; when they
/// do, the first matching row wins.
pub static TABLE: [Entry; 3] = [
    Entry::new(
        Version::new(2, 4, 0),
        Version::new(3, 0, 0),
        &[
            (OptionKey::Exe, None),
            (OptionKey::Coc, None),
            (OptionKey::Ext, Some(EXT_C)),
            (OptionKey::Git, None),
            (OptionKey::GithubUsername, None),
            (OptionKey::Mit, None),
            (OptionKey::Test, Some(TEST_FRAMEWORKS)),
            (OptionKey::Ci, Some(CI_PROVIDERS)),
            (OptionKey::Edit, None),
            (OptionKey::BundleInstall, None),
        ],
    ),
    Entry::new(
        Version::new(3, 0, 0),
        Version::new(4, 0, 0),
        &[
            (OptionKey::Exe, None),
            (OptionKey::Coc, None),
            (OptionKey::Changelog, None),
            (OptionKey::Ext, Some(EXT_C)),
            (OptionKey::Git, None),
            (OptionKey::GithubUsername, None),
            (OptionKey::Mit, None),
            (OptionKey::Test, Some(TEST_FRAMEWORKS)),
            (OptionKey::Ci, Some(CI_PROVIDERS)),
            (OptionKey::Linter, Some(LINTERS)),
            (OptionKey::Edit, None),
            (OptionKey::BundleInstall, None),
        ],
    ),
    Entry::new(
        Version::new(4, 0, 0),
        Version::new(5, 0, 0),
        &[
            (OptionKey::Exe, None),
            (OptionKey::Coc, None),
            (OptionKey::Changelog, None),
            (OptionKey::Ext, Some(EXT_ALL)),
            (OptionKey::Git, None),
            (OptionKey::GithubUsername, None),
            (OptionKey::Mit, None),
            (OptionKey::Test, Some(TEST_FRAMEWORKS)),
            (OptionKey::Ci, Some(CI_PROVIDERS)),
            (OptionKey::Linter, Some(LINTERS)),
            (OptionKey::Edit, None),
            (OptionKey::BundleInstall, None),
        ],
    ),
];

/// Human-readable ranges for every row of `table`
pub fn supported_ranges_in(table: &[Entry]) -> Vec<String> {
    table.iter().map(|entry| entry.to_string()).collect()
}

pub fn supported_ranges() -> Vec<String> {
    supported_ranges_in(&TABLE)
}

/// First row of `table` whose range contains `version`
pub fn resolve_in<'a>(table: &'a [Entry], version: &Version) -> Result<&'a Entry> {
    match table.iter().find(|entry| entry.matches(version)) {
        Some(entry) => {
            tracing::debug!(%version, range = %entry, "resolved compatibility entry");
            Ok(entry)
        }
        None => Err(Error::UnsupportedVersion {
            version: version.to_string(),
            ranges: supported_ranges_in(table).join(" | "),
        }),
    }
}

/// Compatibility entry for a Bundler version
pub fn resolve(version: &Version) -> Result<&'static Entry> {
    resolve_in(&TABLE, version)
}
