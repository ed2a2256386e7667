//! Integration tests for `conpalette get`

use std::fs;

use crate::helpers::Workspace;

#[test]
fn get_text_lists_palette_and_attributes() {
    let ws = Workspace::new();
    let (stdout, stderr, exit_code) = ws.run(&["get"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with(" #  Slot         Color\n"));
    assert!(stdout.contains(" 4  DarkRed      #800000\n"));
    assert!(stdout.contains("15  White        #ffffff\n"));
    assert!(stdout.contains("Text attributes:   0x0007 (Gray on Black)"));
    assert!(stdout.contains("Popup attributes:  0x00f5 (DarkMagenta on White)"));
}

#[test]
fn get_reports_window_without_correction() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["get"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Window:            left 0, top 17, right 79, bottom 41"));
}

#[test]
fn get_does_not_modify_snapshot() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    let (_stdout, _stderr, exit_code) = ws.run(&["get"]);

    assert_eq!(exit_code, 0);
    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn get_json_is_structured() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["get", "--format", "json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["palette"]["DarkRed"], "#800000");
    assert_eq!(value["palette"]["Blue"], "#0000ff");
    assert_eq!(value["text_attributes"]["value"], 7);
    assert_eq!(value["text_attributes"]["foreground"], "Gray");
    assert_eq!(value["window"]["right"], 79);
    assert_eq!(value["fullscreen_supported"], false);
}

#[test]
fn get_toml_is_a_reusable_scheme() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["get", "--format", "toml"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[colors]"));
    assert!(stdout.contains("Red = \"#ff0000\""));
    assert!(stdout.contains("[text]"));

    let scheme_path = ws.path().join("exported.toml");
    fs::write(&scheme_path, &stdout).unwrap();
    let (_stdout, stderr, exit_code) =
        ws.run(&["set", "--scheme", scheme_path.to_str().unwrap()]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(ws.read_console().palette, crate::helpers::legacy_console().palette);
}

#[test]
fn get_uses_configured_format() {
    let ws = Workspace::new();
    fs::write(
        ws.config_dir().join("config.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = ws.run(&["get"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.trim_start().starts_with('{'));
}

#[test]
fn get_uses_configured_snapshot() {
    let ws = Workspace::new();
    let config = format!(
        "[device]\nsnapshot = {:?}\n",
        ws.snapshot().to_str().unwrap()
    );
    fs::write(ws.config_dir().join("config.toml"), config).unwrap();

    let (stdout, stderr, exit_code) = ws.run_bare(&["get"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains(" 9  Blue         #0000ff\n"));
}

#[test]
fn get_missing_snapshot_fails() {
    let ws = Workspace::new();
    let missing = ws.path().join("missing.bin");

    let (_stdout, stderr, exit_code) =
        ws.run_bare(&["get", "--snapshot", missing.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("missing.bin"));
}

#[test]
fn get_truncated_snapshot_fails() {
    let ws = Workspace::new();
    fs::write(ws.snapshot(), [0u8; 40]).unwrap();

    let (_stdout, stderr, exit_code) = ws.run(&["get"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Record is 40 bytes, expected 96"));
}
