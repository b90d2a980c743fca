use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the opc binary.
#[allow(deprecated)]
fn opc_cmd() -> Command {
    Command::cargo_bin("opc").unwrap()
}

#[test]
fn help_works() {
    opc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--query-package"))
        .stdout(predicate::str::contains("--module"));
}

#[test]
fn version_works() {
    opc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
