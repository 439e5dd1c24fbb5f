use cfp::{ProjectionReport, SummaryReport, TransactionReport};

use std::{
    path::PathBuf,
    process::{Command, Output},
};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

const TODAY: &str = "2024-03-30";

fn example(name: &str) -> PathBuf {
    PathBuf::from("./resources/test-examples").join(name)
}

fn run(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_cash-flow-projector"))
        .args(args)
        .env("CASH_FLOW_TODAY", TODAY)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    println!("{}", String::from_utf8_lossy(&output.stderr));

    output
}

fn parse_rows<T: DeserializeOwned>(output: &Output) -> Vec<T> {
    assert!(output.status.success(), "command failed: {output:?}");

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(stdout.as_bytes());

    reader.deserialize().map(|record| record.unwrap()).collect()
}

fn projection_row(day: &str, balance: &str) -> ProjectionReport {
    ProjectionReport {
        day: day.to_string(),
        balance: balance.to_string(),
    }
}

#[test]
fn project() {
    let input = example("transactions_valid.csv");

    let output = run(&["project", input.to_str().unwrap(), "1000.00", "4"]);
    let actual: Vec<ProjectionReport> = parse_rows(&output);

    assert_eq!(
        actual,
        vec![
            projection_row("2024-03-30", "900.10"),
            projection_row("2024-03-31", "-450.25"),
            projection_row("2024-04-01", "2049.75"),
            projection_row("2024-04-02", "2049.75"),
        ]
    );
}

#[test]
fn project_default_horizon() {
    let input = example("transactions_valid.csv");

    let output = run(&["project", input.to_str().unwrap(), "1000"]);
    let actual: Vec<ProjectionReport> = parse_rows(&output);

    assert_eq!(actual.len(), 30);
    assert_eq!(actual[0].day, TODAY);
    assert_eq!(actual[29], projection_row("2024-04-28", "2049.75"));
}

#[test]
fn project_without_days() {
    let input = example("transactions_valid.csv");

    let output = run(&["project", input.to_str().unwrap(), "1000", "0"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn summary() {
    let input = example("transactions_valid.csv");

    let output = run(&["summary", input.to_str().unwrap(), "1000"]);
    let actual: Vec<SummaryReport> = parse_rows(&output);

    assert_eq!(
        actual,
        vec![SummaryReport {
            current_balance: "1000.00".to_string(),
            total_paid: "300.00".to_string(),
            total_pending: "1099.75".to_string(),
        }]
    );
}

#[test]
fn list() {
    let input = example("transactions_valid.csv");

    let ids = |filter: &str| -> Vec<String> {
        let output = run(&["list", input.to_str().unwrap(), filter]);
        let rows: Vec<TransactionReport> = parse_rows(&output);
        rows.into_iter().map(|row| row.id).collect()
    };

    assert_eq!(ids("all"), vec!["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(ids("paid"), vec!["5"]);
    assert_eq!(ids("unpaid"), vec!["1", "2", "3", "4", "6", "7"]);
    assert_eq!(ids("upcoming"), vec!["1", "2", "3", "6", "7"]);

    let output = run(&["list", input.to_str().unwrap()]);
    let rows: Vec<TransactionReport> = parse_rows(&output);

    assert_eq!(
        rows[5],
        TransactionReport {
            id: "6".to_string(),
            description: "Groceries, weekly".to_string(),
            amount: "-150.35".to_string(),
            due_date: "2024-03-31".to_string(),
            is_paid: false,
        }
    );
}

#[test]
fn invalid_amount_aborts() {
    let input = example("transactions_invalid.csv");

    let output = run(&["project", input.to_str().unwrap(), "1000", "3"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\"abc\""), "{stderr}");
    assert!(stderr.contains("Rent"), "{stderr}");
}

#[test]
fn invalid_due_date_aborts() {
    let input = example("transactions_bad_date.csv");

    let output = run(&["summary", input.to_str().unwrap(), "0"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("31/03/2024"), "{stderr}");
}

#[test]
fn invalid_arguments() {
    let input = example("transactions_valid.csv");

    assert!(!run(&[]).status.success());
    assert!(!run(&["project", input.to_str().unwrap(), "lots"]).status.success());
    assert!(!run(&["project", input.to_str().unwrap(), "1", "1.5"]).status.success());
    assert!(!run(&["project", "./missing.csv", "1"]).status.success());

    let output = run(&["project", input.to_str().unwrap(), "0", "9223372036854775807"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Date out of range"));
}
