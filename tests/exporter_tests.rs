// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::Value;
use tempfile::tempdir;
use trackmoney::{
    cli,
    commands::exporter,
    db,
    ledger::Ledger,
    models::{NewTransaction, TxType},
};

fn seeded_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let mut ledger = Ledger::new();
    ledger
        .add_transaction(NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            r#type: TxType::Expense,
            category: "Food & Dining".into(),
            sub_category: "Groceries".into(),
            description: Some("Milk, eggs and \"bread\"".into()),
            amount: Decimal::new(123450, 2),
        })
        .unwrap();
    ledger
        .add_transaction(NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            r#type: TxType::Income,
            category: "Salary".into(),
            sub_category: "Monthly".into(),
            description: None,
            amount: Decimal::from(50000),
        })
        .unwrap();
    db::save_state(&conn, &ledger).unwrap();
    conn
}

fn run_export(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["trackmoney", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, export_m) = matches.subcommand().unwrap();
    exporter::handle(conn, export_m)
}

#[test]
fn csv_quotes_fields_with_commas_and_quotes() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&conn, &["transactions", "--out", out_str.as_str()]).unwrap();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Date,Type,Category,SubCategory,Description,Amount");
    assert_eq!(
        lines[1],
        r#"2025-01-02,expense,Food & Dining,Groceries,"Milk, eggs and ""bread""",1234.50"#
    );
    assert_eq!(lines[2], "2025-01-03,income,Salary,Monthly,,50000");
    assert_eq!(lines.len(), 3);

    // a csv reader gets the original description back
    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let first = rdr.records().next().unwrap().unwrap();
    assert_eq!(&first[4], "Milk, eggs and \"bread\"");
}

#[test]
fn json_export_uses_stored_field_names() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &conn,
        &["transactions", "--format", "json", "--out", out_str.as_str()],
    )
    .unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    let items = written.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["date"], "2025-01-02");
    assert_eq!(items[0]["type"], "expense");
    assert_eq!(items[0]["subCategory"], "Groceries");
    assert!(items[1]["description"].is_null());
}

#[test]
fn unknown_format_fails_without_writing() {
    let conn = seeded_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let err = run_export(&conn, &["transactions", "--format", "xml", "--out", out_str.as_str()]);
    assert!(err.is_err());
    assert!(!out_path.exists());
}

#[test]
fn write_csv_with_no_transactions_is_header_only() {
    let mut buf = Vec::new();
    exporter::write_csv(&mut buf, &[]).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Date,Type,Category,SubCategory,Description,Amount\n"
    );
}
