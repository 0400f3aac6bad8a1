// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Loan {0} not found")]
    LoanNotFound(i64),
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(String),
    #[error("Amount {0} would overflow the running total")]
    AmountOverflow(String),
    #[error("Unknown transaction type '{0}', expected income|expense|saving|investment")]
    UnknownType(String),
    #[error("Unknown {kind} category '{category}'")]
    UnknownCategory { kind: String, category: String },
    #[error("Unknown sub-category '{sub_category}' under '{category}'")]
    UnknownSubCategory {
        category: String,
        sub_category: String,
    },
}
