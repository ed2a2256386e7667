//! Integration tests for `conpalette set`

use std::fs;

use conpalette::{ColorSlot, ColorValue};
use predicates::prelude::*;

use crate::helpers::Workspace;

fn hex(value: &str) -> ColorValue {
    ColorValue::from_hex_string(value).unwrap()
}

// ============================================================================
// Assignments
// ============================================================================

#[test]
fn set_single_slot() {
    let ws = Workspace::new();
    let (stdout, stderr, exit_code) =
        ws.run(&["set", "--slot", "DarkRed", "--color", "#c50f1f"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("#800000 -> #c50f1f"));

    let console = ws.read_console();
    assert_eq!(console.slot(ColorSlot::DarkRed), hex("#c50f1f"));
    assert_eq!(console.slot(ColorSlot::Red), hex("#ff0000"));
}

#[test]
fn set_slot_by_index_and_component_color() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&["set", "--slot", "9", "--color", "59,120,255"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(ws.read_console().slot(ColorSlot::Blue), hex("#3b78ff"));
}

#[test]
fn set_map_entries() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&[
        "set",
        "--map",
        "red=#e74856",
        "--map",
        "Blue=#3b78ff",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let console = ws.read_console();
    assert_eq!(console.slot(ColorSlot::Red), hex("#e74856"));
    assert_eq!(console.slot(ColorSlot::Blue), hex("#3b78ff"));
    assert_eq!(console.slot(ColorSlot::Green), hex("#00ff00"));
}

#[test]
fn set_scheme_file() {
    let ws = Workspace::new();
    let scheme = ws.path().join("scheme.toml");
    fs::write(
        &scheme,
        "[colors]\nBlack = \"#0c0c0c\"\nWhite = [242, 242, 242]\n\n[text]\nbackground = \"DarkBlue\"\n",
    )
    .unwrap();

    let (_stdout, stderr, exit_code) = ws.run(&["set", "--scheme", scheme.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let console = ws.read_console();
    assert_eq!(console.slot(ColorSlot::Black), hex("#0c0c0c"));
    assert_eq!(console.slot(ColorSlot::White), hex("#f2f2f2"));
    assert_eq!(console.text_attributes.raw(), 0x0017);
}

#[test]
fn set_preset_with_attribute_override() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) =
        ws.run(&["set", "--preset", "campbell", "--text-foreground", "White"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let console = ws.read_console();
    assert_eq!(console.slot(ColorSlot::Black), hex("#0c0c0c"));
    assert_eq!(console.slot(ColorSlot::Yellow), hex("#f9f1a5"));
    assert_eq!(console.text_attributes.raw(), 0x000f);
    assert_eq!(console.popup_attributes.raw(), 0x00f5);
}

#[test]
fn set_attributes_only() {
    let ws = Workspace::new();
    let before = ws.read_console();

    let (stdout, stderr, exit_code) = ws.run(&[
        "set",
        "--text-background",
        "1",
        "--popup-foreground",
        "Cyan",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("0x0007 (Gray on Black) -> 0x0017 (Gray on DarkBlue)"));

    let console = ws.read_console();
    assert_eq!(console.palette, before.palette);
    assert_eq!(console.text_attributes.raw(), 0x0017);
    assert_eq!(console.popup_attributes.raw(), 0x00fb);
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn set_widens_window_by_one() {
    let ws = Workspace::new();
    let (_stdout, _stderr, exit_code) = ws.run(&["set", "--slot", "Red", "--color", "#e74856"]);
    assert_eq!(exit_code, 0);

    let console = ws.read_console();
    assert_eq!(console.window.left, 0);
    assert_eq!(console.window.top, 17);
    assert_eq!(console.window.right, 80);
    assert_eq!(console.window.bottom, 42);
}

#[test]
fn repeated_set_widens_each_time() {
    let ws = Workspace::new();
    for _ in 0..2 {
        let (_stdout, _stderr, exit_code) =
            ws.run(&["set", "--slot", "Red", "--color", "#ff0000"]);
        assert_eq!(exit_code, 0);
    }

    let console = ws.read_console();
    assert_eq!(console.window.right, 81);
    assert_eq!(console.window.bottom, 43);
}

#[test]
fn unchanged_colors_still_apply() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&["set", "--slot", "Red", "--color", "#ff0000"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("nothing changed"));
    assert_eq!(ws.read_console().window.right, 80);
}

// ============================================================================
// Dry run and output
// ============================================================================

#[test]
fn dry_run_writes_nothing() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    let (stdout, _stderr, exit_code) =
        ws.run(&["set", "--preset", "campbell", "--dry-run"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("#000000 -> #0c0c0c"));
    assert!(stdout.contains("Dry run"));
    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn set_can_print_applied_configuration() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run(&[
        "set",
        "--slot",
        "Red",
        "--color",
        "#e74856",
        "--format",
        "json",
    ]);

    assert_eq!(exit_code, 0);
    let json_start = stdout.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(value["palette"]["Red"], "#e74856");
    assert_eq!(value["window"]["right"], 80);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn single_and_bulk_forms_conflict() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    ws.assert_command()
        .args(["set", "--slot", "Red", "--color", "#ff0000", "--preset", "campbell"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));

    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn unknown_slot_is_rejected_without_writing() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    ws.assert_command()
        .args(["set", "--map", "Red=#ff0000", "--map", "Purple=#800080"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown color slot 'Purple'"));

    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn invalid_color_is_rejected() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    let (_stdout, stderr, exit_code) = ws.run(&["set", "--slot", "Red", "--color", "#gg0000"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid color value '#gg0000'"));
    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn out_of_range_attribute_is_rejected() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    let (_stdout, stderr, exit_code) = ws.run(&[
        "set",
        "--slot",
        "Red",
        "--color",
        "#ff0000",
        "--popup-background",
        "16",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Attribute index 16 is out of range"));
    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn negative_attribute_index_is_rejected_by_range_check() {
    let ws = Workspace::new();
    let before = ws.snapshot_bytes();

    ws.assert_command()
        .args(["set", "--text-foreground", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Attribute index -1 is out of range"));

    assert_eq!(ws.snapshot_bytes(), before);
}

#[test]
fn oversized_attribute_index_is_rejected_by_range_check() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) =
        ws.run(&["set", "--text-foreground", "99999999999999999999"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("out of range"));
    assert!(!stderr.contains("Unknown color slot"));
}

#[test]
fn duplicate_map_slots_are_rejected() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) =
        ws.run(&["set", "--map", "Red=#ff0000", "--map", "12=#00ff00"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Color slot Red is assigned more than once"));
}

#[test]
fn unknown_preset_lists_available() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&["set", "--preset", "solarized"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown preset 'solarized'"));
    assert!(stderr.contains("campbell, legacy, powershell"));
}

#[test]
fn missing_snapshot_is_a_read_failure_and_not_created() {
    let ws = Workspace::new();
    let missing = ws.path().join("missing.bin");

    let (_stdout, stderr, exit_code) = ws.run_bare(&[
        "set",
        "--slot",
        "Red",
        "--color",
        "#ff0000",
        "--snapshot",
        missing.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read console configuration"));
    assert!(!missing.exists());
}

#[test]
fn nothing_to_set_is_an_error() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run(&["set"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Nothing to set"));
}
