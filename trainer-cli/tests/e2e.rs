//! End-to-end tests for the trainer binary
//!
//! These build and run the CLI through cargo and are gated behind the
//! `integration` feature flag. Run with:
//!
//! ```sh
//! cargo test -p trainer-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::io::Write;
use std::process::{Command, Stdio};

fn trainer(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-q", "-p", "trainer-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to run trainer")
}

/// Test that trainer --help lists the subcommands
#[test]
fn trainer_help_works() {
    let output = trainer(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("HIPAA compliance training simulator"));
    assert!(stdout.contains("decide"));
    assert!(stdout.contains("session"));
}

#[test]
fn decide_denies_nurse_prescribing() {
    let output = trainer(&["decide", "nurse", "prescribe"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DENIED: nurse may not Prescribe"));
    assert!(stdout.contains("| prescribe_DENIED | Access denied"));
}

#[test]
fn logs_go_to_stderr() {
    let output = trainer(&["decide", "doctor", "prescribe"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with("ALLOWED: doctor may Prescribe"));
    assert!(!stdout.contains("training session ready"));
    assert!(stderr.contains("training session ready"));
}

#[test]
fn quiz_with_unknown_id_fails() {
    let output = trainer(&["quiz", "noSuchQuiz", "a"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown quiz: noSuchQuiz"));
}

#[test]
fn session_reads_commands_from_stdin() {
    let mut child = Command::new("cargo")
        .args(["run", "-q", "-p", "trainer-cli", "--", "session"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn trainer session");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"answer bestPractices a\nfinal\nquit\n")
        .expect("Failed to write commands");

    let output = child.wait_with_output().expect("session did not exit");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bestPractices: 100% (Perfect!)"));
    assert!(stdout.contains("Final score: 100.0%"));
}
