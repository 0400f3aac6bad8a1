// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Row layout of the `Transactions` and `Loans` sheets on the remote spreadsheet.

use crate::ledger::Ledger;
use crate::models::{Loan, Transaction};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub const TRANSACTION_HEADERS: [&str; 7] = [
    "Date",
    "Type",
    "Category",
    "SubCategory",
    "Description",
    "Amount",
    "SyncTimestamp",
];

pub const LOAN_HEADERS: [&str; 8] = [
    "Name",
    "Principal",
    "Rate",
    "Tenure",
    "StartDate",
    "EMI",
    "PaidAmount",
    "DueAmount",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetTables {
    #[serde(rename = "Transactions")]
    pub transactions: SheetTable,
    #[serde(rename = "Loans")]
    pub loans: SheetTable,
}

pub fn transaction_rows(txns: &[Transaction], synced_at: &str) -> Vec<Vec<String>> {
    txns.iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.r#type.to_string(),
                t.category.clone(),
                t.sub_category.clone(),
                t.description.clone().unwrap_or_default(),
                t.amount.to_string(),
                synced_at.to_string(),
            ]
        })
        .collect()
}

/// Due amount is computed here, at sync time; it is never stored.
pub fn loan_rows(loans: &[Loan]) -> Vec<Vec<String>> {
    loans
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                l.principal.to_string(),
                l.rate.to_string(),
                l.tenure.to_string(),
                l.start_date.to_string(),
                l.emi.to_string(),
                l.paid_amount.to_string(),
                l.status().due_amount.to_string(),
            ]
        })
        .collect()
}

pub fn render(ledger: &Ledger, synced_at: DateTime<Utc>) -> SheetTables {
    let stamp = synced_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    SheetTables {
        transactions: SheetTable {
            headers: TRANSACTION_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: transaction_rows(&ledger.transactions, &stamp),
        },
        loans: SheetTable {
            headers: LOAN_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: loan_rows(&ledger.loans),
        },
    }
}
