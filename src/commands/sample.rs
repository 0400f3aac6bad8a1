// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{load_state, save_state};
use crate::ledger::Ledger;
use anyhow::{Context, Result, bail};
use rusqlite::Connection;

/// One month of household data plus a home loan and a car loan with their
/// first payments.
pub const SAMPLE_LEDGER: &str = r#"{
  "transactions": [
    {"id": 1704067200000, "date": "2025-01-01", "type": "income", "category": "Salary", "subCategory": "Monthly", "description": "January salary", "amount": 50000},
    {"id": 1704067200001, "date": "2025-01-05", "type": "income", "category": "Business", "subCategory": "Freelance", "description": "Web design project", "amount": 15000},
    {"id": 1704067200002, "date": "2025-01-02", "type": "expense", "category": "Food & Dining", "subCategory": "Groceries", "description": "Weekly groceries", "amount": 3500},
    {"id": 1704067200003, "date": "2025-01-04", "type": "expense", "category": "Transportation", "subCategory": "Fuel", "description": "Petrol", "amount": 1800},
    {"id": 1704067200004, "date": "2025-01-06", "type": "expense", "category": "Utilities", "subCategory": "Electricity", "description": "Electricity bill", "amount": 2000},
    {"id": 1704067200005, "date": "2025-01-08", "type": "expense", "category": "Entertainment", "subCategory": "Movies", "description": "Movie tickets", "amount": 500},
    {"id": 1704067200006, "date": "2025-01-10", "type": "expense", "category": "Shopping", "subCategory": "Clothes", "description": "New shirt", "amount": 2000},
    {"id": 1704067200007, "date": "2025-01-12", "type": "expense", "category": "Healthcare", "subCategory": "Medical", "description": "Doctor visit", "amount": 1500},
    {"id": 1704067200008, "date": "2025-01-15", "type": "saving", "category": "Bank Account", "subCategory": "Savings", "description": "Monthly savings", "amount": 20000},
    {"id": 1704067200009, "date": "2025-01-20", "type": "saving", "category": "Fixed Deposit", "subCategory": "FD 5 Year", "description": "FD investment", "amount": 10000},
    {"id": 1704067200010, "date": "2025-01-25", "type": "investment", "category": "Stock Market", "subCategory": "Mutual Funds", "description": "SIP investment", "amount": 5000},
    {"id": 1704067200011, "date": "2025-01-28", "type": "investment", "category": "Gold", "subCategory": "Digital Gold", "description": "Digital gold purchase", "amount": 2000}
  ],
  "loans": [
    {"id": 1704067200012, "name": "Home Loan", "principal": 5000000, "rate": 7.5, "tenure": 240, "startDate": "2024-06-01", "emi": 38572, "paidAmount": 77144},
    {"id": 1704067200013, "name": "Car Loan", "principal": 1500000, "rate": 8.5, "tenure": 60, "startDate": "2024-11-01", "emi": 28668, "paidAmount": 28668}
  ],
  "emiPayments": {
    "1704067200012": [
      {"date": "2024-07-01", "amount": 38572},
      {"date": "2024-08-01", "amount": 38572}
    ],
    "1704067200013": [
      {"date": "2024-12-01", "amount": 28668}
    ]
  }
}"#;

pub fn sample_ledger() -> Result<Ledger> {
    serde_json::from_str(SAMPLE_LEDGER).context("Sample ledger is malformed")
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("load", sub)) = m.subcommand() {
        let current = load_state(conn)?;
        if !current.is_empty() && !sub.get_flag("force") {
            bail!("Ledger already has data; pass --force to replace it");
        }
        let sample = sample_ledger()?;
        save_state(conn, &sample)?;
        println!(
            "Loaded {} transactions and {} loans",
            sample.transactions.len(),
            sample.loans.len()
        );
    }
    Ok(())
}
