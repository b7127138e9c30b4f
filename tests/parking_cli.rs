//! Drives the `parking` simulator through stdin

use std::io::Write;
use std::process::{Command, Stdio};

fn session(input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_parking"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_intro_prints_expected_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_parking-intro"))
        .output()
        .unwrap();
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "White car has parked.\nYellow car left the parking lot.\nGreen car just parked here.\n"
    );
}

#[test]
fn test_full_session() {
    let input = "\
spot_by_color yellow
create 4
park KA-01-HH-9999 White
park KA-01-HH-3672 Green
park Rs-P-N-21 Red
leave 2
park KA-01-HH-1234 white

status
reg_by_color WHITE
spot_by_color red
spot_by_reg ka-01-hh-1234
spot_by_reg KA-00
drive off
exit
status
";
    let expected = "\
Sorry, a parking lot has not been created.
Created a parking lot with 4 spots.
White car parked in spot 1.
Green car parked in spot 2.
Red car parked in spot 3.
Spot 2 is free.
white car parked in spot 2.
1 KA-01-HH-9999 White
2 KA-01-HH-1234 white
3 Rs-P-N-21 Red
KA-01-HH-9999, KA-01-HH-1234
3
2
No cars with registration number KA-00 were found.
Input Error: drive off
";
    assert_eq!(session(input), expected);
}

#[test]
fn test_ends_at_eof_without_exit() {
    assert_eq!(session("create 1\nstatus"), "Created a parking lot with 1 spots.\nParking lot is empty.\n");
}

#[test]
fn test_logs_stay_off_stdout() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_parking"))
        .env("RUST_LOG", "trace")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"create 1\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Created a parking lot with 1 spots.\n"
    );
}

#[test]
fn test_json_logs_on_stderr() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_parking"))
        .env("RUST_LOG", "debug")
        .env("LOG_FORMAT", "json")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"create 1\nexit\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Created a parking lot with 1 spots.\n"
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<serde_json::Value> = stderr
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line["level"].is_string()));
}

#[test]
fn test_unknown_log_format_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_parking"))
        .env("LOG_FORMAT", "xml")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
