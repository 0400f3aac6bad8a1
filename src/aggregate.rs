// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Time-window filtering and per-type / per-category sums behind the dashboard.

use crate::models::{Transaction, TxType};
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    AllTime,
    /// Calendar month of "today".
    CurrentMonth,
    /// Calendar year of "today".
    CurrentYear,
    CustomMonth { year: i32, month: u32 },
}

impl TimeWindow {
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            TimeWindow::AllTime => true,
            TimeWindow::CurrentMonth => {
                date.year() == today.year() && date.month() == today.month()
            }
            TimeWindow::CurrentYear => date.year() == today.year(),
            TimeWindow::CustomMonth { year, month } => {
                date.year() == year && date.month() == month
            }
        }
    }
}

/// Local wall-clock date; windows are evaluated live on every call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub saving: Decimal,
    pub investment: Decimal,
}

impl Totals {
    pub fn add(&mut self, kind: TxType, amount: Decimal) {
        match kind {
            TxType::Income => self.income = self.income.saturating_add(amount),
            TxType::Expense => self.expense = self.expense.saturating_add(amount),
            TxType::Saving => self.saving = self.saving.saturating_add(amount),
            TxType::Investment => self.investment = self.investment.saturating_add(amount),
        }
    }

    pub fn get(&self, kind: TxType) -> Decimal {
        match kind {
            TxType::Income => self.income,
            TxType::Expense => self.expense,
            TxType::Saving => self.saving,
            TxType::Investment => self.investment,
        }
    }

    pub fn expense_rate(&self) -> Decimal {
        self.share_of_income(self.expense)
    }

    pub fn saving_rate(&self) -> Decimal {
        self.share_of_income(self.saving)
    }

    pub fn investment_rate(&self) -> Decimal {
        self.share_of_income(self.investment)
    }

    /// Savings and investments together, as the dashboard's savings card shows them.
    pub fn combined_savings(&self) -> Decimal {
        self.saving.saturating_add(self.investment)
    }

    pub fn combined_saving_rate(&self) -> Decimal {
        self.share_of_income(self.combined_savings())
    }

    pub fn net_savings(&self) -> Decimal {
        self.income
            .saturating_sub(self.expense)
            .saturating_sub(self.saving)
            .saturating_sub(self.investment)
    }

    // Zero income yields 0%, never a division error.
    fn share_of_income(&self, part: Decimal) -> Decimal {
        if self.income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        percent_of(part, self.income)
    }
}

/// `part / whole * 100`, saturating instead of overflowing. `whole` must be positive.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub label: String,
    pub amount: Decimal,
}

/// Accumulates into `out`, keeping labels in first-seen order.
pub(crate) fn add_to_group(out: &mut Vec<CategoryTotal>, label: &str, amount: Decimal) {
    match out.iter_mut().find(|c| c.label == label) {
        Some(c) => c.amount = c.amount.saturating_add(amount),
        None => out.push(CategoryTotal {
            label: label.to_string(),
            amount,
        }),
    }
}

pub fn filter(txns: &[Transaction], window: TimeWindow, today: NaiveDate) -> Vec<&Transaction> {
    txns.iter()
        .filter(|t| window.contains(t.date, today))
        .collect()
}

pub fn totals<'a, I>(txns: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut out = Totals::default();
    for t in txns {
        out.add(t.r#type, t.amount);
    }
    out
}

pub fn aggregate(txns: &[Transaction], window: TimeWindow) -> Totals {
    aggregate_at(txns, window, today())
}

pub fn aggregate_at(txns: &[Transaction], window: TimeWindow, today: NaiveDate) -> Totals {
    totals(txns.iter().filter(|t| window.contains(t.date, today)))
}

/// Sums one transaction type by category, in first-seen order.
pub fn by_category<'a, I>(txns: I, kind: TxType) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut out = Vec::new();
    for t in txns.into_iter().filter(|t| t.r#type == kind) {
        add_to_group(&mut out, &t.category, t.amount);
    }
    out
}

/// The last `n` transactions, newest-added first.
pub fn recent<'a, I>(txns: I, n: usize) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
    I::IntoIter: DoubleEndedIterator,
{
    txns.into_iter().rev().take(n).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub totals: Totals,
    pub combined_savings: Decimal,
    pub expense_rate: Decimal,
    pub saving_rate: Decimal,
    pub investment_rate: Decimal,
    pub combined_saving_rate: Decimal,
    pub expense_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub transaction_count: usize,
}

pub fn summarize(txns: &[Transaction], window: TimeWindow, today: NaiveDate) -> Summary {
    let filtered = filter(txns, window, today);
    let totals = totals(filtered.iter().copied());
    Summary {
        combined_savings: totals.combined_savings(),
        expense_rate: totals.expense_rate(),
        saving_rate: totals.saving_rate(),
        investment_rate: totals.investment_rate(),
        combined_saving_rate: totals.combined_saving_rate(),
        expense_by_category: by_category(filtered.iter().copied(), TxType::Expense),
        income_by_category: by_category(filtered.iter().copied(), TxType::Income),
        transaction_count: filtered.len(),
        totals,
    }
}
