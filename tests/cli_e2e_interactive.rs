//! End-to-end tests for `--interactive` using TTY simulation.
//!
//! These tests use the `rexpect` crate to simulate an interactive terminal session,
//! which is required because `dialoguer` prompts need a real TTY.
//!
//! **Platform limitation**: `rexpect` only works on Unix-like systems (Linux, macOS, WSL).
//! These tests are automatically skipped on Windows.
//!
//! See: <https://github.com/console-rs/dialoguer/issues/95>

#![cfg(unix)]

use std::process::Command;

use rexpect::process::wait::WaitStatus;
use rexpect::session::{spawn_command, PtySession};

/// Create a new PTY session running `starter-cli` with the given flag.
fn spawn_interactive(flag: &str) -> Result<PtySession, rexpect::error::Error> {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("starter-cli"));
    cmd.arg(flag).env("NO_COLOR", "1").env_remove("RUST_LOG");

    spawn_command(cmd, Some(30_000)) // 30 second timeout
}

/// Wait for the menu to be drawn.
fn expect_menu(session: &mut PtySession) {
    session
        .exp_string("starter-cli")
        .expect("Should see intro banner");
    session
        .exp_string("What would you like to do?")
        .expect("Should see the prompt");
    session
        .exp_string("Option 2")
        .expect("Should see both options");
}

fn assert_exit_code(session: &PtySession, expected: i32) {
    match session.process.wait().expect("Failed to wait for process") {
        WaitStatus::Exited(_, code) => assert_eq!(code, expected),
        other => panic!("Process did not exit normally: {:?}", other),
    }
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_selection_completes() {
    let mut session = spawn_interactive("--interactive").expect("Failed to spawn session");

    expect_menu(&mut session);

    // Accept the highlighted first option
    session.send_line("").expect("Failed to send Enter");

    session.exp_string("Done!").expect("Should see spinner stop");
    session
        .exp_string("Completed successfully")
        .expect("Should see success outro");
    session.exp_eof().expect("Process should exit");

    assert_exit_code(&session, 0);
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_second_option_completes() {
    let mut session = spawn_interactive("-i").expect("Failed to spawn session");

    expect_menu(&mut session);

    // Move down to the second option, then accept it
    session.send("j").expect("Failed to send down");
    session.flush().expect("Failed to flush");
    session.send_line("").expect("Failed to send Enter");

    session
        .exp_string("Completed successfully")
        .expect("Should see success outro");
    session.exp_eof().expect("Process should exit");

    assert_exit_code(&session, 0);
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_quit_cancels() {
    let mut session = spawn_interactive("--interactive").expect("Failed to spawn session");

    expect_menu(&mut session);

    session.send("q").expect("Failed to send quit");
    session.flush().expect("Failed to flush");

    session
        .exp_string("Cancelled")
        .expect("Should see cancellation outro");
    session.exp_eof().expect("Process should exit");

    assert_exit_code(&session, 0);
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_ctrl_c_cancels() {
    let mut session = spawn_interactive("--interactive").expect("Failed to spawn session");

    expect_menu(&mut session);

    session.send_control('c').expect("Failed to send Ctrl-C");

    session
        .exp_string("Cancelled")
        .expect("Should see cancellation outro");
    session.exp_eof().expect("Process should exit");

    assert_exit_code(&session, 0);
}
