//! Bundler version detection

use crate::error::{Error, Result};
use semver::Version;
use std::process::Command;

/// Extract the first `X.Y.Z` from `bundle --version` output
///
/// Handles `Bundler version 2.5.6`, bare `4.0.0`, Ruby banners such as
/// `ruby 3.1.4p223`, and pre-release suffixes such as `2.6.0.dev`, which are
/// truncated to their numeric part.
pub fn parse_version_output(output: &str) -> Option<Version> {
    output.split_whitespace().find_map(|token| {
        let token = token.strip_prefix('v').unwrap_or(token);
        let parts: Vec<u64> = token
            .split('.')
            .take(3)
            .map_while(|part| {
                // Ruby patch levels trail the number: `3.1.4p223`
                let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            })
            .collect();
        match parts[..] {
            [major, minor, patch] => Some(Version::new(major, minor, patch)),
            _ => None,
        }
    })
}

/// Run `<bundle_command> --version` and parse the result
pub fn detect_bundler_version(bundle_command: &str) -> Result<Version> {
    let output = Command::new(bundle_command)
        .arg("--version")
        .output()
        .map_err(|e| {
            tracing::debug!(error = %e, "failed to spawn bundler");
            Error::BundlerNotDetected(format!("Bundler executable not found: {}", bundle_command))
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    tracing::debug!(output = %text.trim(), "bundler version output");

    parse_version_output(&text).ok_or_else(|| {
        Error::BundlerNotDetected(format!(
            "Cannot parse bundler version from: {:?}",
            text.trim()
        ))
    })
}
