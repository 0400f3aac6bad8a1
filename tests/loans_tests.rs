// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;
use trackmoney::{
    cli,
    commands::{loans, sample},
    db,
};

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_loan(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["trackmoney", "loan"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, loan_m) = matches.subcommand().unwrap();
    loans::handle(conn, loan_m)
}

fn add_loan(conn: &Connection, args: &[&str]) -> anyhow::Result<i64> {
    let mut argv = vec!["trackmoney", "loan", "add"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, loan_m) = matches.subcommand().unwrap();
    let (_, add_m) = loan_m.subcommand().unwrap();
    loans::add(conn, add_m)
}

#[test]
fn sample_fixture_balances() {
    let ledger = sample::sample_ledger().unwrap();
    let rows = loans::loan_rows(&ledger);
    assert_eq!(rows.len(), 2);

    let home = &rows[0];
    assert_eq!(home.name, "Home Loan");
    assert_eq!(home.paid_amount, d("77144"));
    assert_eq!(home.due_amount, d("4922856"));
    assert_eq!(home.percent_paid, d("1.54288"));
    assert_eq!(home.end_date, "2044-06-01");
    assert!(!home.overpaid);

    let car = &rows[1];
    assert_eq!(car.paid_amount, d("28668"));
    assert_eq!(car.due_amount, d("1471332"));
    assert_eq!(ledger.payments(car.id).len(), 1);
}

#[test]
fn add_pay_and_remove_through_cli() {
    let conn = conn();
    let id = add_loan(
        &conn,
        &[
            "--name",
            "Home Loan",
            "--principal",
            "5000000",
            "--rate",
            "7.5",
            "--tenure",
            "240",
            "--start",
            "2024-06-01",
        ],
    )
    .unwrap();
    let id_s = id.to_string();

    run_loan(&conn, &["pay", id_s.as_str(), "--amount", "38572", "--date", "2024-07-01"]).unwrap();
    run_loan(&conn, &["pay", id_s.as_str(), "--amount", "38572", "--date", "2024-08-01"]).unwrap();

    let ledger = db::load_state(&conn).unwrap();
    let loan = ledger.loan(id).unwrap();
    assert_eq!(loan.emi, d("40279.66"));
    assert_eq!(loan.paid_amount, d("77144"));
    assert_eq!(loan.status().due_amount, d("4922856"));
    let history = ledger.payments(id);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].date.to_string(), "2024-08-01");

    // without --amount the stored EMI is paid
    run_loan(&conn, &["pay", id_s.as_str(), "--date", "2024-09-01"]).unwrap();
    let ledger = db::load_state(&conn).unwrap();
    assert_eq!(ledger.loan(id).unwrap().paid_amount, d("117423.66"));

    run_loan(&conn, &["rm", id_s.as_str()]).unwrap();
    let ledger = db::load_state(&conn).unwrap();
    assert!(ledger.loans.is_empty());
    assert!(ledger.payments(id).is_empty());

    // second delete is a no-op
    run_loan(&conn, &["rm", id_s.as_str()]).unwrap();
}

#[test]
fn paying_an_unknown_loan_fails() {
    let conn = conn();
    assert!(run_loan(&conn, &["pay", "42", "--amount", "100"]).is_err());
    assert!(run_loan(&conn, &["pay", "42"]).is_err());
    assert!(run_loan(&conn, &["payments", "42"]).is_err());
}

#[test]
fn add_rejects_bad_terms() {
    let conn = conn();
    let base = ["--name", "Bad", "--rate", "7.5", "--start", "2025-01-01"];

    let mut zero_principal = base.to_vec();
    zero_principal.extend(["--principal", "0", "--tenure", "12"]);
    assert!(add_loan(&conn, &zero_principal).is_err());

    let mut zero_tenure = base.to_vec();
    zero_tenure.extend(["--principal", "1000", "--tenure", "0"]);
    assert!(add_loan(&conn, &zero_tenure).is_err());

    assert!(db::load_state(&conn).unwrap().loans.is_empty());
}

#[test]
fn overpayment_is_recorded_and_flagged() {
    let conn = conn();
    let id = add_loan(
        &conn,
        &[
            "--name",
            "Short",
            "--principal",
            "1000",
            "--rate",
            "12",
            "--tenure",
            "12",
            "--start",
            "2025-01-31",
        ],
    )
    .unwrap();
    run_loan(&conn, &["pay", id.to_string().as_str(), "--amount", "1500"]).unwrap();

    let ledger = db::load_state(&conn).unwrap();
    let rows = loans::loan_rows(&ledger);
    assert_eq!(rows[0].due_amount, d("-500"));
    assert!(rows[0].overpaid);
    assert_eq!(rows[0].end_date, "2026-01-31");
}
