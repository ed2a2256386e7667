//! Integration tests for `conpalette config`

use std::fs;

use crate::helpers::Workspace;

#[test]
fn config_show_prints_defaults() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run_bare(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[output]"));
    assert!(stdout.contains("format = \"text\""));
    assert!(stdout.contains("stream = \"stdout\""));
}

#[test]
fn config_show_reflects_file() {
    let ws = Workspace::new();
    fs::write(
        ws.config_dir().join("config.toml"),
        "[output]\nswatches = false\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = ws.run_bare(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("swatches = false"));
}

#[test]
fn invalid_config_is_reported() {
    let ws = Workspace::new();
    fs::write(ws.config_dir().join("config.toml"), "[output\n").unwrap();

    let (_stdout, stderr, exit_code) = ws.run(&["get"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn migrate_yes_creates_missing_file() {
    let ws = Workspace::new();
    let path = ws.config_dir().join("config.toml");

    let (stdout, _stderr, exit_code) = ws.run_bare(&["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("it would be created with"));
    assert!(stdout.contains("+ output.format = \"text\""));
    assert!(stdout.contains("Wrote "));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[output]"));
    assert!(content.contains("[device]"));
}

#[test]
fn migrate_adds_fields_and_keeps_comments() {
    let ws = Workspace::new();
    let path = ws.config_dir().join("config.toml");
    fs::write(&path, "# my settings\n[output]\nformat = \"json\"\n").unwrap();

    let (stdout, _stderr, exit_code) = ws.run_bare(&["config", "migrate", "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("is missing 2 setting(s)"));
    assert!(stdout.contains("+ output.swatches = true"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# my settings"));
    assert!(content.contains("format = \"json\""));
    assert!(content.contains("swatches = true"));
    assert!(content.contains("[device]"));

    let (stdout, _stderr, exit_code) = ws.run_bare(&["config", "migrate"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("already up to date"));
}

#[test]
fn migrate_without_yes_does_not_write_when_not_interactive() {
    let ws = Workspace::new();
    let path = ws.config_dir().join("config.toml");

    let (stdout, _stderr, exit_code) = ws.run_bare(&["config", "migrate"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made"));
    assert!(!path.exists());
}
