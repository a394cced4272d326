use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::process::Stdio;
use tempfile::NamedTempFile;

fn notifykit() -> Command {
    let mut cmd = Command::cargo_bin("notifykit").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_prints_both_notifications() {
    notifykit()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "EmailObserver received: Welcome to MarketBridge!\n\
             SMSObserver received: Your order has shipped!\n\
             Generic type retained: ",
        ));
}

#[test]
fn test_output_is_deterministic() {
    let first = notifykit().output().unwrap();
    let second = notifykit().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_flags_override_contents() {
    notifykit()
        .args(["--sms-content", "Out for delivery", "--no-type-note"])
        .assert()
        .success()
        .stdout(
            "EmailObserver received: Welcome to MarketBridge!\n\
             SMSObserver received: Out for delivery\n",
        );
}

#[test]
fn test_json_flag() {
    notifykit()
        .args(["--json", "--no-type-note"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"content":"Welcome to MarketBridge!","observer":"EmailObserver"}"#,
        ));
}

#[test]
fn test_config_file_is_applied() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [demo]
        email_content = "Configured welcome"
        show_type_note = false
    "#
    )
    .unwrap();

    notifykit()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("EmailObserver received: Configured welcome\n"))
        .stdout(predicate::str::contains("Generic type").not());
}

#[test]
fn test_missing_config_file_fails() {
    notifykit()
        .args(["--config", "/nonexistent/notifykit.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_logs_stay_off_stdout() {
    notifykit()
        .args(["--log-level", "debug", "--no-type-note"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starting up").not())
        .stderr(predicate::str::contains("notifykit starting up"));
}

#[test]
fn test_unwritable_stdout_is_logged_not_fatal() {
    // A read-only handle as stdout makes every write fail.
    let file = NamedTempFile::new().unwrap();
    let read_only = File::open(file.path()).unwrap();

    let output = std::process::Command::cargo_bin("notifykit")
        .unwrap()
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(read_only))
        .output()
        .unwrap();

    output
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to write notification"))
        .stderr(predicate::str::contains("panicked").not());
}
