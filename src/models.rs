// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a transaction. Amounts are always stored non-negative; the
/// type carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
    Saving,
    Investment,
}

impl TxType {
    pub const ALL: [TxType; 4] = [
        TxType::Income,
        TxType::Expense,
        TxType::Saving,
        TxType::Investment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
            TxType::Saving => "saving",
            TxType::Investment => "investment",
        }
    }

    /// Sign shown next to the amount in listings.
    pub fn sign(&self) -> char {
        match self {
            TxType::Expense => '-',
            _ => '+',
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            "saving" => Ok(TxType::Saving),
            "investment" => Ok(TxType::Investment),
            other => Err(LedgerError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub r#type: TxType,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Decimal,
}

/// Input for [`crate::ledger::Ledger::add_transaction`]; the ledger assigns the id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub r#type: TxType,
    pub category: String,
    pub sub_category: String,
    pub description: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub name: String,
    pub principal: Decimal,
    pub rate: Decimal, // annual, percent
    pub tenure: u32,   // months
    pub start_date: NaiveDate,
    pub emi: Decimal,
    #[serde(default)]
    pub paid_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiPayment {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Values derived from a loan on read; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanStatus {
    pub due_amount: Decimal,
    pub percent_paid: Decimal,
    pub end_date: Option<NaiveDate>,
    pub overpaid: bool,
}
