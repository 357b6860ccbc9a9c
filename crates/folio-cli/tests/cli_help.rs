use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("folio")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reveal"))
        .stdout(predicate::str::contains("gallery"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--view"));
}

#[test]
fn test_gallery_help_lists_subcommands() {
    cargo_bin_cmd!("folio")
        .args(["gallery", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("folio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_unknown_command_fails() {
    cargo_bin_cmd!("folio")
        .arg("frobnicate")
        .assert()
        .failure();
}
