//! End-to-end smoke test: runs the real binary in a pseudo-terminal.

use rexpect::session::spawn_command;
use std::process::Command;

const ENTER_ALTERNATE_SCREEN: &str = "\u{1b}[?1049h";

#[test]
fn smoke_test_start_and_quit() {
    let log_dir = tempfile::tempdir().expect("Failed to create log dir");

    let mut command = Command::new(env!("CARGO_BIN_EXE_tui-dashboard"));
    command
        .env("TUI_DASHBOARD_LOG_DIR", log_dir.path())
        // A fresh pty has no window size; crossterm falls back to terminfo
        .env("TERM", "xterm-256color");

    let mut session = spawn_command(command, Some(10_000)).expect("Failed to spawn dashboard");
    session
        .exp_string(ENTER_ALTERNATE_SCREEN)
        .expect("Dashboard should enter the alternate screen");

    session.send("2").expect("Failed to send key");
    session.send("q").expect("Failed to send key");
    session.flush().expect("Failed to flush");

    session
        .exp_string("Thanks for using Ratatui TUI!")
        .expect("Dashboard should print the farewell");
    session.exp_eof().expect("Dashboard should exit after quit");

    let logs: Vec<_> = std::fs::read_dir(log_dir.path())
        .expect("Log dir should exist")
        .collect();
    assert!(!logs.is_empty(), "a log file should be written");
}
