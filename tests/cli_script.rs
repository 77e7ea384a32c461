use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("accounting_cli").unwrap();
    cmd.env("ACCOUNTING_CLI_SCRIPT", "1")
        .env("ACCOUNTING_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_records_and_reports() {
    let home = tempdir().unwrap();
    let input = "\
transaction add type=income date=2024-03-01 amount=2500 category=Salary payee=Employer reason=Pay
transaction add type=expense date=2024-03-02 amount=1200 category=Rent payee=Landlord reason=\"March rent\"
statement 2024-03-01 2024-03-31
exit
";

    cli(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Transaction recorded"))
        .stdout(contains("Total income:  $2500.00"))
        .stdout(contains("Total expense: $1200.00"))
        .stdout(contains("Balance:       $1300.00"))
        .stdout(contains("Showing 2 of 2 transactions"));

    let stored =
        std::fs::read_to_string(home.path().join("data").join("accounting_transactions.json"))
            .unwrap();
    assert!(stored.contains("\"Landlord\""));
}

#[test]
fn books_persist_between_sessions() {
    let home = tempdir().unwrap();
    cli(home.path())
        .write_stdin("category add Pet Care\ntransaction add type=expense date=2024-05-01 amount=40 category=\"Pet Care\" payee=Vet reason=Checkup\n")
        .assert()
        .success();

    cli(home.path())
        .write_stdin("category list\nstatement 2024-05-01 2024-05-31 type=expense payee=Vet\n")
        .assert()
        .success()
        .stdout(contains("Pet Care"))
        .stdout(contains("Type: expense | All Categories | Person: Vet"))
        .stdout(contains("-$40.00"));
}

#[test]
fn invalid_input_is_reported_without_ending_the_session() {
    let home = tempdir().unwrap();
    cli(home.path())
        .write_stdin("transaction add type=expense amount=0\ntransactoin list\nstatement 2024-02-01 2024-01-01\nhelp\n")
        .assert()
        .success()
        .stdout(contains("amount must be greater than 0"))
        .stdout(contains("Suggestion: `transaction`?"))
        .stdout(contains("is after end date"))
        .stdout(contains("Available commands"))
        .stdout(contains("Transaction recorded").not());
}
