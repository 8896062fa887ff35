//! Registry of every `bundle gem` option the wizard knows about
//!
//! `OptionKey::ALL` fixes the order used for validation, wizard steps and
//! command assembly.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic name of a configurable option
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    Exe,
    Coc,
    Changelog,
    Ext,
    Git,
    GithubUsername,
    Mit,
    Test,
    Ci,
    Linter,
    Edit,
    BundleInstall,
}

impl OptionKey {
    /// Every key, in wizard presentation order
    pub const ALL: [OptionKey; 12] = [
        OptionKey::Exe,
        OptionKey::Coc,
        OptionKey::Changelog,
        OptionKey::Ext,
        OptionKey::Git,
        OptionKey::GithubUsername,
        OptionKey::Mit,
        OptionKey::Test,
        OptionKey::Ci,
        OptionKey::Linter,
        OptionKey::Edit,
        OptionKey::BundleInstall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::Exe => "exe",
            OptionKey::Coc => "coc",
            OptionKey::Changelog => "changelog",
            OptionKey::Ext => "ext",
            OptionKey::Git => "git",
            OptionKey::GithubUsername => "github_username",
            OptionKey::Mit => "mit",
            OptionKey::Test => "test",
            OptionKey::Ci => "ci",
            OptionKey::Linter => "linter",
            OptionKey::Edit => "edit",
            OptionKey::BundleInstall => "bundle_install",
        }
    }

    /// Static definition for this key
    pub fn definition(&self) -> &'static OptionDefinition {
        definition(*self)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OptionKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownOption(s.to_string()))
    }
}

/// Value kind of an option, with the command tokens it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `--x` / `--no-x`
    Toggle { on: &'static str, off: &'static str },
    /// One-way flag: only an "on" token exists
    Flag { on: &'static str },
    /// `--x=value` or `--no-x`
    Enum {
        flag: &'static str,
        none: &'static str,
        values: &'static [&'static str],
    },
    /// `--x=value`
    Text { flag: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    pub key: OptionKey,
    pub kind: OptionKind,
}

const DEFINITIONS: [OptionDefinition; 12] = [
    OptionDefinition {
        key: OptionKey::Exe,
        kind: OptionKind::Toggle { on: "--exe", off: "--no-exe" },
    },
    OptionDefinition {
        key: OptionKey::Coc,
        kind: OptionKind::Toggle { on: "--coc", off: "--no-coc" },
    },
    OptionDefinition {
        key: OptionKey::Changelog,
        kind: OptionKind::Toggle { on: "--changelog", off: "--no-changelog" },
    },
    OptionDefinition {
        key: OptionKey::Ext,
        kind: OptionKind::Enum {
            flag: "--ext",
            none: "--no-ext",
            values: &["c", "go", "rust"],
        },
    },
    OptionDefinition {
        key: OptionKey::Git,
        kind: OptionKind::Flag { on: "--git" },
    },
    OptionDefinition {
        key: OptionKey::GithubUsername,
        kind: OptionKind::Text { flag: "--github-username" },
    },
    OptionDefinition {
        key: OptionKey::Mit,
        kind: OptionKind::Toggle { on: "--mit", off: "--no-mit" },
    },
    OptionDefinition {
        key: OptionKey::Test,
        kind: OptionKind::Enum {
            flag: "--test",
            none: "--no-test",
            values: &["minitest", "rspec", "test-unit"],
        },
    },
    OptionDefinition {
        key: OptionKey::Ci,
        kind: OptionKind::Enum {
            flag: "--ci",
            none: "--no-ci",
            values: &["circle", "github", "gitlab"],
        },
    },
    OptionDefinition {
        key: OptionKey::Linter,
        kind: OptionKind::Enum {
            flag: "--linter",
            none: "--no-linter",
            values: &["rubocop", "standard"],
        },
    },
    OptionDefinition {
        key: OptionKey::Edit,
        kind: OptionKind::Text { flag: "--edit" },
    },
    OptionDefinition {
        key: OptionKey::BundleInstall,
        kind: OptionKind::Toggle { on: "--bundle", off: "--no-bundle" },
    },
];

/// Definition for a registered key
pub fn definition(key: OptionKey) -> &'static OptionDefinition {
    // DEFINITIONS is laid out in OptionKey::ALL order
    &DEFINITIONS[key as usize]
}

/// Definition for an option name, failing with `UnknownOption` if unregistered
pub fn lookup(name: &str) -> Result<&'static OptionDefinition> {
    name.parse::<OptionKey>().map(definition)
}

/// Registry order
pub fn ordered_keys() -> &'static [OptionKey] {
    &OptionKey::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_follow_key_order() {
        for key in OptionKey::ALL {
            assert_eq!(definition(key).key, key);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let def = lookup("github_username").unwrap();
        assert_eq!(def.key, OptionKey::GithubUsername);
        assert_eq!(def.kind, OptionKind::Text { flag: "--github-username" });
    }

    #[test]
    fn test_lookup_unknown_option() {
        let err = lookup("frobnicate").unwrap_err();
        assert!(matches!(err, Error::UnknownOption(ref name) if name == "frobnicate"));
        assert_eq!(err.to_string(), "Unknown option: frobnicate");
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in ordered_keys() {
            assert_eq!(key.as_str().parse::<OptionKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_git_is_one_way_flag() {
        assert!(matches!(OptionKey::Git.definition().kind, OptionKind::Flag { .. }));
    }
}
