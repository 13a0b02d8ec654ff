//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// A command isolated from any `.env` file or database settings on the host.
fn wenku(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wenku").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("WENKU_BIND")
        .env_remove("WENKU_MAX_CONNECTIONS");
    cmd
}

#[test]
fn test_top_level_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    wenku(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let dir = tempfile::tempdir().unwrap();
    wenku(&dir)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--memory"))
        .stdout(predicate::str::contains("--seed-policy"))
        .stdout(predicate::str::contains("127.0.0.1:8080"));
}

#[test]
fn test_seed_help_lists_policies() {
    let dir = tempfile::tempdir().unwrap();
    wenku(&dir)
        .args(["seed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip-existing"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    wenku(&dir)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_env_file_in_working_directory_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "WENKU_BIND=not-an-address\n").unwrap();

    wenku(&dir)
        .args(["serve", "--memory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-an-address"));
}

#[test]
fn test_invalid_seed_policy_rejected() {
    let dir = tempfile::tempdir().unwrap();
    wenku(&dir)
        .args(["serve", "--memory", "--seed-policy", "overwrite"])
        .assert()
        .failure();
}
