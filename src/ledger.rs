// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ledger is the whole application state: transactions, loans and the
//! payment history of every loan. It is loaded from and saved to persistence
//! as one value (see [`crate::db`]).

use crate::error::LedgerError;
use crate::models::{EmiPayment, Loan, NewTransaction, Transaction};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub emi_payments: BTreeMap<i64, Vec<EmiPayment>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.loans.is_empty()
    }

    /// Millisecond timestamp, bumped past every id already in use.
    pub(crate) fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max_tx = self.transactions.iter().map(|t| t.id).max();
        let max_loan = self.loans.iter().map(|l| l.id).max();
        match max_tx.max(max_loan) {
            Some(max) if max >= now => max + 1,
            _ => now,
        }
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<&Transaction, LedgerError> {
        if new.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(new.amount.to_string()));
        }
        let tx = Transaction {
            id: self.next_id(),
            date: new.date,
            r#type: new.r#type,
            category: new.category,
            sub_category: new.sub_category,
            description: new.description.filter(|d| !d.trim().is_empty()),
            amount: new.amount,
        };
        debug!(id = tx.id, kind = %tx.r#type, amount = %tx.amount, "transaction added");
        self.transactions.push(tx);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Removes and returns the transaction; unknown ids leave the ledger as is.
    pub fn delete_transaction(&mut self, id: i64) -> Option<Transaction> {
        let idx = self.transactions.iter().position(|t| t.id == id)?;
        debug!(id, "transaction deleted");
        Some(self.transactions.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxType;
    use chrono::NaiveDate;

    fn new_tx(kind: TxType, amount: i64) -> NewTransaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            r#type: kind,
            category: "Salary".into(),
            sub_category: "Monthly".into(),
            description: Some("  ".into()),
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn ids_increase_even_within_one_millisecond() {
        let mut ledger = Ledger::new();
        let a = ledger.add_transaction(new_tx(TxType::Income, 10)).unwrap().id;
        let b = ledger.add_transaction(new_tx(TxType::Income, 20)).unwrap().id;
        let c = ledger.add_transaction(new_tx(TxType::Income, 30)).unwrap().id;
        assert!(a < b && b < c);
    }

    #[test]
    fn negative_amount_rejected() {
        let mut ledger = Ledger::new();
        let err = ledger
            .add_transaction(new_tx(TxType::Expense, -5))
            .unwrap_err();
        assert_eq!(err, LedgerError::NegativeAmount("-5".into()));
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn blank_description_is_dropped() {
        let mut ledger = Ledger::new();
        let tx = ledger.add_transaction(new_tx(TxType::Income, 1)).unwrap();
        assert_eq!(tx.description, None);
    }

    #[test]
    fn delete_transaction_is_idempotent() {
        let mut ledger = Ledger::new();
        let id = ledger.add_transaction(new_tx(TxType::Income, 10)).unwrap().id;
        assert!(ledger.delete_transaction(id + 1000).is_none());
        assert_eq!(ledger.transactions.len(), 1);
        assert_eq!(ledger.delete_transaction(id).map(|t| t.id), Some(id));
        assert!(ledger.delete_transaction(id).is_none());
        assert!(ledger.is_empty());
    }
}
