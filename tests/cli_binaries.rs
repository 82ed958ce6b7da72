//! Smoke tests driving the installed `srckit` binary directly.

use std::process::Command;

fn binary_output(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_srckit"))
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run srckit: {error}"))
}

#[test]
fn help_lists_every_tool() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage: srckit"));
    assert!(stdout.contains("tree"));
    assert!(stdout.contains("migrate"));
    assert!(stdout.contains("export"));
}

#[test]
fn version_prints_the_banner() {
    let output = binary_output(&["--version"]);
    assert!(output.status.success(), "--version should succeed");
    assert!(
        output.stderr.is_empty(),
        "version output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("srckit"));
    assert!(stdout.contains("https://github.com/ellan-top/srckit"));
}

#[test]
fn without_a_command_reports_usage() {
    let output = binary_output(&[]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "running without a command should report a usage error"
    );
    assert!(output.stdout.is_empty(), "usage errors belong on stderr");
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("missing command"));
}

#[test]
fn unknown_flag_is_rejected() {
    let output = binary_output(&["--definitely-not-a-flag"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "usage errors belong on stderr");
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("unexpected argument"));
}
