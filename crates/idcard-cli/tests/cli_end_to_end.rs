//! End-to-end tests that run the compiled `idcard` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn idcard(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_idcard"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run idcard binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn check_all_valid_exits_zero() {
    let out = idcard(&["check", "110101199003071233", "110101880101001"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "110101199003071233\tvalid\n110101880101001\tvalid\n"
    );
}

#[test]
fn check_any_invalid_exits_one() {
    let out = idcard(&["check", "--explain", "110101199003071233", "11010119900307123X"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("110101199003071233\tvalid\n"));
    assert!(text.contains("11010119900307123X\tinvalid\tchecksum:"));
}

#[test]
fn check_without_input_exits_two() {
    let out = idcard(&["check"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
}

#[test]
fn check_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ids.txt");
    std::fs::write(&path, "110101199003071233\n\n   440303880101042  \n").unwrap();

    let out = idcard(&["check", "--file", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "110101199003071233\tvalid\n440303880101042\tvalid\n"
    );
}

#[test]
fn check_missing_file_exits_one_with_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let out = idcard(&["check", "--file", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to open"));
}

#[test]
fn check_reads_stdin_as_json() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_idcard"))
        .args(["check", "--stdin", "--json"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"110101199003071233\n990101123456789\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert_eq!(out.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["valid"], true);
    assert_eq!(arr[0]["region_name"], "Beijing");
    assert_eq!(arr[1]["valid"], false);
}

#[test]
fn regions_lists_table() {
    let out = idcard(&["regions"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Total: 35 regions"));
}

#[test]
fn checksum_computes_character() {
    let out = idcard(&["checksum", "11010519491231002"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "X\n");

    let out = idcard(&["checksum", "123"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn check_argument_with_leading_space_is_invalid() {
    let out = idcard(&["check", " 110101199003071233"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), " 110101199003071233\tinvalid\n");
}

#[test]
fn check_file_with_non_utf8_line_checks_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ids.txt");
    std::fs::write(&path, b"110101199003071233\n\xff\xfe\n440303880101042\n").unwrap();

    let out = idcard(&["check", "--file", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "110101199003071233\tvalid");
    assert!(lines[1].ends_with("\tinvalid"));
    assert_eq!(lines[2], "440303880101042\tvalid");
}
