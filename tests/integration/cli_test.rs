//! Integration tests for top-level CLI behavior

use crate::helpers::Workspace;

#[test]
fn help_lists_subcommands() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run_bare(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["get", "set", "presets", "config", "completions"] {
        assert!(stdout.contains(command), "missing {}", command);
    }
    assert!(stdout.contains("--snapshot"));
}

#[test]
fn set_help_explains_forms() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run_bare(&["set", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("mutually exclusive"));
    assert!(stdout.contains("--map <SLOT=COLOR>"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn version_includes_build_date() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run_bare(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with(&format!("conpalette {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn unknown_subcommand_exits_2() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run_bare(&["paint"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn completions_generate_script() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run_bare(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("_conpalette"));
}

#[test]
fn presets_lists_builtin_palettes() {
    let ws = Workspace::new();
    let (stdout, _stderr, exit_code) = ws.run_bare(&["presets"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("campbell  Campbell"));
    assert!(stdout.contains("legacy  Legacy"));
    assert!(stdout.contains("powershell  PowerShell"));
    assert!(stdout.contains("#0c0c0c #0037da"));
}

#[cfg(not(windows))]
#[test]
fn live_console_is_unavailable_off_windows() {
    let ws = Workspace::new();
    let (_stdout, stderr, exit_code) = ws.run_bare(&["get"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("only supported on Windows"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let ws = Workspace::new();
    let (stdout, stderr, exit_code) =
        ws.run(&["-vv", "set", "--slot", "Red", "--color", "#e74856"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("corrected window bounds"));
    assert!(!stdout.contains("corrected window bounds"));
}
