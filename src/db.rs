// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "TrackMoney", "trackmoney"));

/// The whole ledger is stored as one JSON document under this key.
pub const STATE_KEY: &str = "trackYourMoneyData";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("trackmoney.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS app_state(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

/// Loads the ledger; a database that never saved one yields an empty ledger.
pub fn load_state(conn: &Connection) -> Result<Ledger> {
    let blob: Option<String> = conn
        .query_row(
            "SELECT value FROM app_state WHERE key=?1",
            params![STATE_KEY],
            |r| r.get(0),
        )
        .optional()?;
    match blob {
        Some(s) => serde_json::from_str(&s).context("Stored ledger is not valid JSON"),
        None => {
            debug!("no stored ledger, starting empty");
            Ok(Ledger::default())
        }
    }
}

/// Overwrites the stored ledger with `ledger`.
pub fn save_state(conn: &Connection, ledger: &Ledger) -> Result<()> {
    let blob = serde_json::to_string(ledger)?;
    conn.execute(
        "INSERT INTO app_state(key, value, updated_at) VALUES(?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
        params![STATE_KEY, blob, Utc::now()],
    )?;
    debug!(
        transactions = ledger.transactions.len(),
        loans = ledger.loans.len(),
        "ledger saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn missing_state_loads_empty() {
        let conn = conn();
        assert_eq!(load_state(&conn).unwrap(), Ledger::default());
    }

    #[test]
    fn save_overwrites_whole_state() {
        let conn = conn();
        let mut ledger = Ledger::new();
        let id = ledger
            .create_loan(
                "Car Loan",
                Decimal::from(1_500_000),
                Decimal::new(85, 1),
                60,
                NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            )
            .id;
        ledger
            .record_payment(id, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(), Decimal::from(28_668))
            .unwrap();
        save_state(&conn, &ledger).unwrap();
        assert_eq!(load_state(&conn).unwrap(), ledger);

        ledger.delete_loan(id);
        save_state(&conn, &ledger).unwrap();
        let reloaded = load_state(&conn).unwrap();
        assert!(reloaded.loans.is_empty());
        assert!(reloaded.emi_payments.is_empty());
    }

    #[test]
    fn loads_browser_shaped_blob() {
        let conn = conn();
        let blob = r#"{
            "transactions": [
                {"id": 1704067200000, "date": "2025-01-01", "type": "income",
                 "category": "Salary", "subCategory": "Monthly",
                 "description": "January salary", "amount": 50000}
            ],
            "loans": [
                {"id": 1704067200012, "name": "Home Loan", "principal": 5000000,
                 "rate": 7.5, "tenure": 240, "startDate": "2024-06-01",
                 "emi": 38572, "paidAmount": 77144}
            ],
            "emiPayments": {
                "1704067200012": [{"date": "2024-07-01", "amount": 38572}]
            }
        }"#;
        conn.execute(
            "INSERT INTO app_state(key, value, updated_at) VALUES(?1, ?2, '2025-01-01')",
            params![STATE_KEY, blob],
        )
        .unwrap();
        let ledger = load_state(&conn).unwrap();
        assert_eq!(ledger.transactions[0].r#type, TxType::Income);
        assert_eq!(ledger.loans[0].rate, Decimal::new(75, 1));
        assert_eq!(ledger.payments(1704067200012).len(), 1);
    }
}
