use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn midlang(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_midlang")).args(args)
                                                               .stdin(Stdio::piped())
                                                               .stdout(Stdio::piped())
                                                               .stderr(Stdio::piped())
                                                               .spawn()
                                                               .expect("failed to start midlang");
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(stdin.as_bytes())
         .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for midlang")
}

fn script(name: &str, source: &str) -> String {
    let path = std::env::temp_dir().join(format!("midlang-cli-{}-{name}.mid", std::process::id()));
    std::fs::write(&path, source).expect("failed to write script");
    path.to_string_lossy().into_owned()
}

#[test]
fn successful_run_exits_with_zero() {
    let output = midlang(&["demos/greet.mid"], "Lin\n20\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "Hi Lin\nIn ten years you will be 30\nMonths lived: 240\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn runtime_error_is_reported_on_stderr() {
    let path = script("runtime", "print(1);\nvar x = 5 / 0;\nprint(2);\n");
    let output = midlang(&[&path], "");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was {stderr:?}");
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn lex_error_exits_with_one() {
    let path = script("lex", "var s = \"abc");
    let output = midlang(&[&path], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: line 1, column 9"));
}

#[test]
fn missing_file_fails() {
    let output = midlang(&["demos/does-not-exist.mid"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}
