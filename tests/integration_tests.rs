use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

/// Run with an empty home so no user config leaks into the test
fn isolated_home() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scroll a line of text"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marquee"));
}

#[test]
fn test_cli_requires_title() {
    let home = isolated_home();
    cargo_bin_cmd!()
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("TITLE"));
}

#[test]
fn test_cli_rejects_zero_delay() {
    let home = isolated_home();
    cargo_bin_cmd!()
        .env("HOME", home.path())
        .args(["Hello", "--delay", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step interval must be greater than zero"));
}

#[test]
fn test_cli_rejects_negative_step() {
    let home = isolated_home();
    cargo_bin_cmd!()
        .env("HOME", home.path())
        .args(["Hello", "--step=-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pixel step must be greater than zero"));
}

#[test]
fn test_cli_rejects_unknown_colour() {
    let home = isolated_home();
    cargo_bin_cmd!()
        .env("HOME", home.path())
        .args(["Hello", "--color", "not-a-colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid colour"));
}

#[test]
fn test_cli_rejects_font_without_size() {
    let home = isolated_home();
    cargo_bin_cmd!()
        .env("HOME", home.path())
        .args(["Hello", "--font", "bold arial"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid font"));
}

#[test]
fn test_cli_rejects_bad_colour_from_config() {
    let home = isolated_home();
    let config_dir = home.path().join(".config").join("marquee");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[marquee]\ncolor = \"sparkly\"\n").unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg("Hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid colour: sparkly"));
}
