// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::models::TxType;

pub struct CategoryGroup {
    pub name: &'static str,
    pub sub_categories: &'static [&'static str],
}

const fn group(name: &'static str, sub_categories: &'static [&'static str]) -> CategoryGroup {
    CategoryGroup {
        name,
        sub_categories,
    }
}

static INCOME: &[CategoryGroup] = &[
    group("Salary", &["Monthly", "Annual Bonus", "Additional Income"]),
    group("Business", &["Sales", "Services", "Freelance"]),
    group("Investments", &["Dividends", "Interest", "Rental Income"]),
    group("Other", &["Gifts", "Reimbursement", "Other"]),
];

static EXPENSE: &[CategoryGroup] = &[
    group("Food & Dining", &["Groceries", "Restaurants", "Cafes"]),
    group("Transportation", &["Fuel", "Public Transport", "Maintenance"]),
    group("Utilities", &["Electricity", "Water", "Internet", "Phone"]),
    group("Entertainment", &["Movies", "Games", "Hobbies"]),
    group("Shopping", &["Clothes", "Electronics", "Home"]),
    group("Healthcare", &["Medical", "Medicines", "Fitness"]),
    group("Education", &["Courses", "Books", "Tuition"]),
    group("Other", &["Miscellaneous"]),
];

static SAVING: &[CategoryGroup] = &[
    group("Bank Account", &["Savings", "Current", "Others"]),
    group("Fixed Deposit", &["FD 1 Year", "FD 3 Year", "FD 5 Year"]),
    group("Piggy Bank", &["Cash Box", "Digital Savings"]),
    group("Other", &["Miscellaneous"]),
];

static INVESTMENT: &[CategoryGroup] = &[
    group("Stock Market", &["Stocks", "Mutual Funds", "ETF"]),
    group("Real Estate", &["Property", "REIT"]),
    group("Crypto", &["Bitcoin", "Ethereum", "Others"]),
    group("Gold", &["Physical Gold", "Digital Gold"]),
    group("Bonds", &["Government Bonds", "Corporate Bonds"]),
    group("Other", &["Others"]),
];

pub fn categories(kind: TxType) -> &'static [CategoryGroup] {
    match kind {
        TxType::Income => INCOME,
        TxType::Expense => EXPENSE,
        TxType::Saving => SAVING,
        TxType::Investment => INVESTMENT,
    }
}

pub fn find(kind: TxType, category: &str) -> Option<&'static CategoryGroup> {
    categories(kind).iter().find(|g| g.name == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCheck {
    Known,
    UnknownCategory,
    UnknownSubCategory,
}

/// Categories are an open set: unknown names are reported, and only
/// [`require_known`] turns them into errors.
pub fn check(kind: TxType, category: &str, sub_category: &str) -> CategoryCheck {
    match find(kind, category) {
        None => CategoryCheck::UnknownCategory,
        Some(_) if sub_category.is_empty() => CategoryCheck::Known,
        Some(g) if g.sub_categories.iter().any(|s| *s == sub_category) => CategoryCheck::Known,
        Some(_) => CategoryCheck::UnknownSubCategory,
    }
}

pub fn require_known(kind: TxType, category: &str, sub_category: &str) -> Result<(), LedgerError> {
    match check(kind, category, sub_category) {
        CategoryCheck::Known => Ok(()),
        CategoryCheck::UnknownCategory => Err(LedgerError::UnknownCategory {
            kind: kind.to_string(),
            category: category.to_string(),
        }),
        CategoryCheck::UnknownSubCategory => Err(LedgerError::UnknownSubCategory {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
        }),
    }
}
