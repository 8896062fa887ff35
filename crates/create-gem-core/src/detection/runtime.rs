//! Ruby, RubyGems and Bundler versions

use super::bundler_version::{detect_bundler_version, parse_version_output};
use crate::error::Result;
use semver::Version;
use std::fmt;
use std::process::Command;

/// Detected toolchain versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersions {
    pub ruby: Option<Version>,
    pub rubygems: Option<Version>,
    pub bundler: Version,
}

impl RuntimeVersions {
    /// `(name, version)` pairs in display order, `unknown` when undetected
    pub fn entries(&self) -> [(&'static str, String); 3] {
        let show = |v: &Option<Version>| {
            v.as_ref()
                .map(Version::to_string)
                .unwrap_or_else(|| "unknown".to_string())
        };
        [
            ("ruby", show(&self.ruby)),
            ("rubygems", show(&self.rubygems)),
            ("bundler", self.bundler.to_string()),
        ]
    }
}

impl fmt::Display for RuntimeVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries()
            .iter()
            .map(|(name, version)| format!("{} {}", name, version))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Version reported by `<program> --version`, if it runs and prints one
fn tool_version(program: &str) -> Option<Version> {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            parse_version_output(&String::from_utf8_lossy(&out.stdout))
        }
        Ok(out) => {
            tracing::debug!(program, status = %out.status, "version probe failed");
            None
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "version probe could not run");
            None
        }
    }
}

/// Detect all versions. `bundler_override` skips running `bundle`.
pub fn detect_runtime(bundler_override: Option<&Version>) -> Result<RuntimeVersions> {
    let bundler = match bundler_override {
        Some(version) => version.clone(),
        None => detect_bundler_version("bundle")?,
    };

    Ok(RuntimeVersions {
        ruby: tool_version("ruby"),
        rubygems: tool_version("gem"),
        bundler,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_marks_unknown_versions() {
        let versions = RuntimeVersions {
            ruby: Some(Version::new(3, 3, 0)),
            rubygems: None,
            bundler: Version::new(2, 5, 6),
        };
        assert_eq!(
            versions.to_string(),
            "ruby 3.3.0, rubygems unknown, bundler 2.5.6"
        );
    }

    #[test]
    fn test_override_skips_bundler_detection() {
        let version = Version::new(3, 1, 0);
        let detected = detect_runtime(Some(&version)).unwrap();
        assert_eq!(detected.bundler, version);
    }

    #[test]
    fn test_missing_tool_has_no_version() {
        assert_eq!(tool_version("definitely-not-a-ruby-binary"), None);
    }
}
