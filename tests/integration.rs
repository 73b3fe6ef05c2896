// Integration tests for the readiness CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the readiness binary.
fn readiness() -> Command {
    let mut cmd = Command::cargo_bin("readiness").expect("binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    readiness()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("readiness"));
}

#[test]
fn cli_help_flag() {
    readiness()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dataset readiness"));
}

#[test]
fn score_requires_path() {
    readiness()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn ingest_dbt_requires_manifest() {
    readiness()
        .arg("ingest-dbt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn verbose_and_quiet_conflict() {
    readiness()
        .args(["-v", "-q", "codes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn codes_lists_every_reason_with_its_action() {
    readiness()
        .arg("codes")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing_owner\townership\tassign_owner"))
        .stdout(predicate::str::contains(
            "backward_incompatible\tstability\tmaintain_compatibility",
        ))
        .stdout(predicate::str::contains(
            "missing_limitations\toperational\tdocument_limitations",
        ));
}
