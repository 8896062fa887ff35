use assert_cmd::{cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Binary with its config directory pointed at `home` and no Bundler
/// settings leaking in from the environment
fn create_gem(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("create-gem");
    cmd.env("XDG_CONFIG_HOME", home)
        .env("BUNDLE_USER_CONFIG", home.join("bundle-config"))
        .env_remove("BUNDLE_GEM__TEST")
        .env_remove("BUNDLE_GEM__CI")
        .env_remove("BUNDLE_GEM__LINTER")
        .env_remove("CREATE_GEM_LOG");
    cmd
}

fn write_config(home: &Path, yaml: &str) {
    let dir = home.join("create-gem");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yml"), yaml).unwrap();
}

const PRESETS: &str = "\
version: 1
presets:
  work:
    exe: true
    test: rspec
  lint:
    linter: rubocop
";

// -- Help & version --

#[test]
fn version_shows_version() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_flags() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bundler-version"))
        .stdout(predicate::str::contains("--dry-run"));
}

// -- Doctor --

#[test]
fn doctor_prints_supported_options() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["--doctor", "--bundler-version", "3.1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundler: 3.1.0"))
        .stdout(predicate::str::contains(
            "supported options: exe, coc, changelog, ext, git, github_username, mit, test, ci, linter, edit, bundle_install",
        ));
}

#[test]
fn doctor_rejects_unsupported_bundler() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["--doctor", "--bundler-version", "1.0.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bundler: 1.0.0"))
        .stderr(predicate::str::contains("Unsupported bundler version: 1.0.0"));
}

#[test]
fn malformed_bundler_version_is_rejected() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["--doctor", "--bundler-version", "three"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bundler-version"));
}

// -- Presets --

#[test]
fn preset_dry_run_prints_command() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["my_gem", "--preset", "work", "--dry-run", "--bundler-version", "3.1.0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("bundle gem my_gem --exe --test=rspec\n"));
}

#[test]
fn preset_dry_run_records_last_used() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["my_gem", "--preset", "work", "--dry-run", "--bundler-version", "3.1.0"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(tmp.path().join("create-gem/config.yml")).unwrap();
    assert!(saved.contains("last_used"));
    assert!(saved.contains("rspec"));
}

#[test]
fn preset_option_unsupported_by_older_bundler() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["my_gem", "--preset", "lint", "--dry-run", "--bundler-version", "2.4.22"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Option linter is not supported by this bundler version",
        ));
}

#[test]
fn preset_requires_gem_name() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["--preset", "work", "--dry-run", "--bundler-version", "3.1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Gem name is required when --preset is provided",
        ));
}

#[test]
fn preset_with_invalid_gem_name() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["1bad", "--preset", "work", "--dry-run", "--bundler-version", "3.1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid gem name: \"1bad\""));
}

#[test]
fn list_presets_prints_sorted_names() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::diff("lint\nwork\n"));
}

#[test]
fn list_presets_without_config_is_empty() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn show_preset_prints_values() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["--show-preset", "work"])
        .assert()
        .success()
        .stdout(predicate::str::diff("work\n  exe: true\n  test: \"rspec\"\n"));
}

#[test]
fn show_missing_preset_fails() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["--show-preset", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Preset not found: ghost"));
}

#[test]
fn delete_preset_removes_it() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), PRESETS);

    create_gem(tmp.path())
        .args(["--delete-preset", "lint"])
        .assert()
        .success();

    create_gem(tmp.path())
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::diff("work\n"));
}

#[test]
fn malformed_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), "presets: [unclosed");

    create_gem(tmp.path())
        .arg("--list-presets")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file at"));
}

// -- Conflicting flags --

#[test]
fn doctor_cannot_be_combined_with_other_actions() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["--doctor", "--list-presets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn preset_queries_cannot_be_combined_with_create() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["my_gem", "--show-preset", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn delete_preset_cannot_be_combined_with_create() {
    let tmp = TempDir::new().unwrap();
    create_gem(tmp.path())
        .args(["--delete-preset", "work", "--preset", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
