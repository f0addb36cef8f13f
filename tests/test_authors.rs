use assert_cmd::Command;

#[test]
fn test_authors() {
    let mut cmd = Command::cargo_bin("argtrust").unwrap();
    cmd.arg("authors").arg("--logging-level").arg("off");
    let expected = format!(
        "{} {}\n{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS").replace(':', ", ")
    );
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_no_command() {
    let mut cmd = Command::cargo_bin("argtrust").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_unknown_command() {
    let mut cmd = Command::cargo_bin("argtrust").unwrap();
    cmd.arg("foo");
    cmd.assert().failure();
}
