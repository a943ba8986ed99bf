//! End-to-end exit code checks through the public entrypoint.

use std::fs;

use tempfile::TempDir;

#[test]
fn theme_with_valid_overrides_succeeds() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("theme.json");
    fs::write(&path, r##"{"dark": {"--oxy-dialog-background": "#101818"}}"##).expect("write");

    let code = oxygen_cli::run_with_args([
        "oxygen",
        "theme",
        "--mode",
        "dark",
        "--overrides",
        path.to_str().expect("utf8 path"),
    ]);
    assert_eq!(code, 0);
}

#[test]
fn replay_of_missing_file_fails_operationally() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("missing.json");
    let code = oxygen_cli::run_with_args(["oxygen", "replay", path.to_str().expect("utf8 path")]);
    assert_eq!(code, 3);
}

#[test]
fn unknown_icon_set_is_rejected() {
    assert_eq!(oxygen_cli::run_with_args(["oxygen", "icons", "fontawesome"]), 2);
}

#[test]
fn bad_log_format_still_runs_command() {
    assert_eq!(
        oxygen_cli::run_with_args(["oxygen", "--log-format", "xml", "icons"]),
        0
    );
}
