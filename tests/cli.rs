//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! WEALTHTRACK_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wealthtrack").unwrap();
    cmd.env("WEALTHTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn records_income_and_shows_balance() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["transaction", "income", "1500", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    cmd(&dir)
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income:   Kz 1500.00"));
}

#[test]
fn affordable_expense_commits_immediately() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["transaction", "income", "500", "Salary"])
        .assert()
        .success();

    cmd(&dir)
        .args(["transaction", "expense", "300", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));
}

#[test]
fn overdraft_expense_prompts_and_cancels_on_no() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["transaction", "income", "500", "Salary"])
        .assert()
        .success();

    cmd(&dir)
        .args(["transaction", "expense", "700", "Groceries"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("balance at -Kz 200.00"))
        .stdout(predicate::str::contains("cancelled"));

    // Nothing was committed
    cmd(&dir)
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: Kz 0.00"));
}

#[test]
fn overdraft_expense_commits_with_yes_flag() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["transaction", "income", "500", "Salary"])
        .assert()
        .success();

    cmd(&dir)
        .args(["transaction", "expense", "700", "Groceries", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    cmd(&dir)
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:        -Kz 200.00"))
        .stdout(predicate::str::contains("Negative balance"));
}

#[test]
fn budget_tracks_expense_and_alerts_when_exceeded() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["transaction", "income", "10000", "Salary"])
        .assert()
        .success();

    cmd(&dir)
        .args(["budget", "add", "Groceries", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created budget"));

    cmd(&dir)
        .args(["transaction", "expense", "120", "Groceries"])
        .assert()
        .success();

    cmd(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120.0%"));

    cmd(&dir)
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget exceeded: Groceries"));
}

#[test]
fn goal_lifecycle() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args([
            "goal",
            "add",
            "Vacation",
            "1000",
            "2030-01-01",
            "--category",
            "savings",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal"));

    cmd(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation"));
}

#[test]
fn investment_computes_current_value() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["investment", "add", "stocks", "1000", "5.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kz 1055.00"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    cmd(&dir)
        .args(["transaction", "income", "1500", "Salary"])
        .assert()
        .success();

    cmd(&dir)
        .args(["export", "csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("Salary"));
}

#[test]
fn audit_records_operations() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["transaction", "income", "1500", "Salary"])
        .assert()
        .success();

    cmd(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Currency:       Kz"));
}
