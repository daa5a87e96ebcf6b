// CLI surface tests — no network: help output, argument parsing, and
// client-side validation (which runs before anything is sent).

use assert_cmd::Command;
use predicates::prelude::*;

fn klima() -> Command {
    Command::cargo_bin("klima").expect("binary builds")
}

#[test]
fn no_args_shows_help() {
    klima()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_lists_all_commands() {
    klima()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("statuses"))
        .stdout(predicate::str::contains("manufacturers"));
}

#[test]
fn list_help_shows_filter_flags() {
    klima()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("--manufacturer"));
}

#[test]
fn create_without_fields_fails_validation_before_any_request() {
    klima()
        .arg("create")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("name: Name is required"))
        .stderr(predicate::str::contains(
            "installationDate: Installation date is required",
        ))
        .stderr(predicate::str::contains("statusId: Status is required"));
}

#[test]
fn create_rejects_a_garbage_date() {
    klima()
        .args([
            "create",
            "--name",
            "Unit A",
            "--model",
            "X-1000",
            "--serial-number",
            "SN-1",
            "--location",
            "Roof",
            "--installation-date",
            "01/03/2024",
            "--status",
            "1",
            "--type",
            "1",
            "--manufacturer",
            "1",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn delete_without_confirmation_aborts_cleanly() {
    // Non-interactive stdin: the confirm prompt cannot be answered, so the
    // delete is aborted without touching the network.
    klima()
        .args(["delete", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Aborted."));
}

#[test]
fn show_requires_an_integer_id() {
    klima()
        .args(["show", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
