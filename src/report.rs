// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly, yearly and category breakdowns over the full transaction history.
//!
//! Period rows come out in calendar order regardless of the order the
//! transactions were entered in.

use crate::aggregate::{CategoryTotal, Totals, add_to_group};
use crate::models::Transaction;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRow {
    /// Sortable key: `YYYY-MM` for months, `YYYY` for years.
    pub period: String,
    /// Human label: `January 2025` for months, `2025` for years.
    pub label: String,
    #[serde(flatten)]
    pub totals: Totals,
    pub net_savings: Decimal,
}

impl PeriodRow {
    fn new(period: String, label: String, totals: Totals) -> Self {
        Self {
            period,
            label,
            net_savings: totals.net_savings(),
            totals,
        }
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

pub fn monthly_report(txns: &[Transaction]) -> Vec<PeriodRow> {
    let mut by_month: BTreeMap<(i32, u32), Totals> = BTreeMap::new();
    for t in txns {
        by_month
            .entry((t.date.year(), t.date.month()))
            .or_default()
            .add(t.r#type, t.amount);
    }
    by_month
        .into_iter()
        .map(|((y, m), totals)| PeriodRow::new(format!("{y}-{m:02}"), month_label(y, m), totals))
        .collect()
}

pub fn yearly_report(txns: &[Transaction]) -> Vec<PeriodRow> {
    let mut by_year: BTreeMap<i32, Totals> = BTreeMap::new();
    for t in txns {
        by_year
            .entry(t.date.year())
            .or_default()
            .add(t.r#type, t.amount);
    }
    by_year
        .into_iter()
        .map(|(y, totals)| PeriodRow::new(y.to_string(), y.to_string(), totals))
        .collect()
}

/// Sums keyed `"<type> - <category>"`, optionally limited to one
/// `(year, month)`. Keys appear in first-seen order.
pub fn category_report(txns: &[Transaction], month: Option<(i32, u32)>) -> Vec<CategoryTotal> {
    let mut out = Vec::new();
    let in_month = |t: &&Transaction| match month {
        Some((y, m)) => t.date.year() == y && t.date.month() == m,
        None => true,
    };
    for t in txns.iter().filter(in_month) {
        add_to_group(&mut out, &format!("{} - {}", t.r#type, t.category), t.amount);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::totals;
    use crate::models::TxType;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tx(date: &str, kind: TxType, category: &str, amount: &str) -> Transaction {
        Transaction {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            r#type: kind,
            category: category.into(),
            sub_category: String::new(),
            description: None,
            amount: d(amount),
        }
    }

    // Entered out of calendar order on purpose.
    fn history() -> Vec<Transaction> {
        vec![
            tx("2025-02-01", TxType::Income, "Salary", "52000"),
            tx("2025-01-01", TxType::Income, "Salary", "50000"),
            tx("2025-01-02", TxType::Expense, "Food & Dining", "3500"),
            tx("2024-12-20", TxType::Investment, "Gold", "2000"),
            tx("2025-02-05", TxType::Expense, "Food & Dining", "4000"),
            tx("2025-01-15", TxType::Saving, "Bank Account", "20000"),
        ]
    }

    #[test]
    fn monthly_rows_sorted_by_calendar() {
        let rows = monthly_report(&history());
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["December 2024", "January 2025", "February 2025"]);
        assert_eq!(rows[1].period, "2025-01");
        assert_eq!(rows[1].net_savings, d("26500"));
        assert_eq!(rows[0].net_savings, d("-2000"));
    }

    #[test]
    fn monthly_report_partitions_history() {
        let txns = history();
        let rows = monthly_report(&txns);
        let all = totals(&txns);
        for kind in TxType::ALL {
            let sum: Decimal = rows.iter().map(|r| r.totals.get(kind)).sum();
            assert_eq!(sum, all.get(kind), "{kind} does not reconcile");
        }
    }

    #[test]
    fn yearly_rows() {
        let rows = yearly_report(&history());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "2024");
        assert_eq!(rows[1].totals.income, d("102000"));
        assert_eq!(rows[1].net_savings, d("74500"));
    }

    #[test]
    fn category_report_with_and_without_month() {
        let txns = history();
        let all = category_report(&txns, None);
        assert_eq!(all[0].label, "income - Salary");
        assert_eq!(all[0].amount, d("102000"));
        assert_eq!(all[1].label, "expense - Food & Dining");
        assert_eq!(all[1].amount, d("7500"));

        let jan = category_report(&txns, Some((2025, 1)));
        assert_eq!(jan.len(), 3);
        assert_eq!(jan[0].amount, d("50000"));
    }

    #[test]
    fn empty_history_gives_empty_reports() {
        assert!(monthly_report(&[]).is_empty());
        assert!(yearly_report(&[]).is_empty());
        assert!(category_report(&[], Some((2025, 1))).is_empty());
    }

    #[test]
    fn huge_months_do_not_panic() {
        let big = "50000000000000000000000000000";
        let txns = vec![
            tx("2025-01-01", TxType::Income, "Salary", big),
            tx("2025-01-02", TxType::Income, "Salary", big),
            tx("2025-01-03", TxType::Expense, "Shopping", big),
        ];
        let months = monthly_report(&txns);
        assert_eq!(months[0].totals.income, Decimal::MAX);
        assert_eq!(yearly_report(&txns)[0].totals.income, Decimal::MAX);
        assert_eq!(category_report(&txns, None)[0].amount, Decimal::MAX);
    }
}
