//! Labels and help text shown by the wizard

use crate::options::OptionKey;

pub fn label(key: OptionKey) -> &'static str {
    match key {
        OptionKey::Exe => "Create executable",
        OptionKey::Coc => "Add CODE_OF_CONDUCT.md",
        OptionKey::Changelog => "Add CHANGELOG.md",
        OptionKey::Ext => "Native extension",
        OptionKey::Git => "Initialize git",
        OptionKey::GithubUsername => "GitHub username",
        OptionKey::Mit => "Include MIT license",
        OptionKey::Test => "Test framework",
        OptionKey::Ci => "CI provider",
        OptionKey::Linter => "Linter",
        OptionKey::Edit => "Editor command",
        OptionKey::BundleInstall => "Run bundle install",
    }
}

pub fn help_text(key: OptionKey) -> &'static str {
    match key {
        OptionKey::Exe => "Adds an executable file in exe/ so users can run your gem as a command.",
        OptionKey::Coc => "Adds a code of conduct template for contributors.",
        OptionKey::Changelog => "Adds CHANGELOG.md to track release notes.",
        OptionKey::Ext => "Sets up native extension scaffolding for C, Go, or Rust.",
        OptionKey::Git => "Initializes a git repository for the new gem.",
        OptionKey::GithubUsername => "Used in links and metadata for your GitHub account.",
        OptionKey::Mit => "Adds the MIT license file.",
        OptionKey::Test => "Chooses which test framework files to generate.",
        OptionKey::Ci => "Chooses CI pipeline config to include.",
        OptionKey::Linter => "Chooses linting setup for style and quality checks.",
        OptionKey::Edit => "Sets your preferred command for opening files.",
        OptionKey::BundleInstall => "Runs bundle install after generating the gem.",
    }
}

/// Short hint shown next to a choice
pub fn choice_hint(key: OptionKey, choice: &str) -> Option<&'static str> {
    let hint = match (key, choice) {
        (OptionKey::Ext, "c") => "classic native extension path",
        (OptionKey::Ext, "go") => "Go-based extension via FFI/tooling",
        (OptionKey::Ext, "rust") => "Rust extension path",
        (OptionKey::Ext, "none") => "no native extension",
        (OptionKey::Test, "minitest") => "small built-in Ruby test style",
        (OptionKey::Test, "rspec") => "popular behavior-style testing",
        (OptionKey::Test, "test-unit") => "xUnit-style test framework",
        (OptionKey::Test, "none") => "no test framework files",
        (OptionKey::Ci, "circle") => "CircleCI config",
        (OptionKey::Ci, "github") => "GitHub Actions workflow",
        (OptionKey::Ci, "gitlab") => "GitLab CI pipeline",
        (OptionKey::Ci, "none") => "no CI config",
        (OptionKey::Linter, "rubocop") => "full-featured Ruby linting",
        (OptionKey::Linter, "standard") => "zero-config style linting",
        (OptionKey::Linter, "none") => "no linter config",
        (OptionKey::GithubUsername | OptionKey::Edit, "set") => "enter a value now",
        (OptionKey::GithubUsername | OptionKey::Edit, "none") => "leave unset",
        _ => return None,
    };
    Some(hint)
}

/// `NN/TT Label - help`
pub fn question(key: OptionKey, index: usize, total: usize) -> String {
    format!(
        "{:02}/{:02} {} - {}",
        index + 1,
        total,
        label(key),
        help_text(key)
    )
}
