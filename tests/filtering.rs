//! Integration tests for level, field, and value filtering.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn lfmt() -> Command {
    let mut cmd = Command::cargo_bin("lfmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/lfmt-test-no-config");
    cmd
}

const LEVELED_INPUT: &str = "level=trace msg=trace_msg\n\
level=debug msg=debug_msg\n\
level=info msg=info_msg\n\
level=warn msg=warn_msg\n\
level=error msg=error_msg\n\
level=fatal msg=fatal_msg\n";

#[test]
fn level_warn_shows_warn_and_above() {
    let output = lfmt()
        .arg("--color=never")
        .arg("--level=warn")
        .write_stdin(LEVELED_INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("trace_msg"), "trace should be filtered");
    assert!(!stdout.contains("debug_msg"), "debug should be filtered");
    assert!(!stdout.contains("info_msg"), "info should be filtered");
    assert!(stdout.contains("warn_msg"), "warn should pass");
    assert!(stdout.contains("error_msg"), "error should pass");
    assert!(stdout.contains("fatal_msg"), "fatal should pass");
}

#[test]
fn no_level_flag_shows_all() {
    let output = lfmt()
        .arg("--color=never")
        .write_stdin(LEVELED_INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for msg in [
        "trace_msg",
        "debug_msg",
        "info_msg",
        "warn_msg",
        "error_msg",
        "fatal_msg",
    ] {
        assert!(stdout.contains(msg), "{msg} should pass without a threshold");
    }
}

#[test]
fn level_flag_case_insensitive() {
    let output = lfmt()
        .arg("--color=never")
        .arg("--level=ERROR")
        .write_stdin(LEVELED_INPUT)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("info_msg"));
    assert!(stdout.contains("error_msg"));
}

#[test]
fn invalid_level_flag_is_config_error() {
    lfmt()
        .arg("--level=verbose")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level"));
}

#[test]
fn field_filter_exact_match_only() {
    let input = "msg=yes user=bob\nmsg=no user=bobby\nmsg=neither\n";
    let output = lfmt()
        .arg("--color=never")
        .arg("--filter=user=bob")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("msg=yes"));
    assert!(!stdout.contains("msg=no"), "substring match must not pass");
    assert!(!stdout.contains("msg=neither"));
}

#[test]
fn multiple_filters_must_all_match() {
    let input = "msg=a user=bob status=200\nmsg=b user=bob status=500\n";
    let output = lfmt()
        .arg("--color=never")
        .arg("--filter=user=bob,status=200")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("msg=a"));
    assert!(!stdout.contains("msg=b"));
}

#[test]
fn invalid_filter_is_config_error() {
    lfmt()
        .arg("--filter=nodelimiter")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid filter"));
}

#[test]
fn output_selection_shows_only_named_fields() {
    let input = "level=info msg=hi user=bob port=8080\n";
    lfmt()
        .arg("--color=never")
        .arg("--output=msg")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(" [INFO] msg=hi\n");
}

#[test]
fn output_selection_imposes_order() {
    let input = "level=info a=1 b=2 c=3\n";
    lfmt()
        .arg("--color=never")
        .arg("--output=c,a")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(" [INFO] c=3 a=1\n");
}

#[test]
fn all_mode_reorders_without_dropping() {
    let input = "level=info a=1 b=2 c=3\n";
    lfmt()
        .arg("--color=never")
        .arg("--output=b")
        .arg("--all")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(" [INFO] b=2 a=1 c=3\n");
}

#[test]
fn exclude_hides_fields() {
    let input = "level=info msg=hi caller=main.rs:10 pid=4242\n";
    lfmt()
        .arg("--color=never")
        .arg("--exclude=caller,pid")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(" [INFO] msg=hi\n");
}

#[test]
fn selection_tolerates_fields_missing_from_some_lines() {
    let input = "level=info msg=a user=bob\nlevel=info msg=b\n";
    let output = lfmt()
        .arg("--color=never")
        .arg("--output=msg,user")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, " [INFO] msg=a user=bob\n [INFO] msg=b\n");
}
