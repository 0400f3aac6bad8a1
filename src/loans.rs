// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Loan lifecycle on top of the [`Ledger`]: creation with a stored EMI,
//! payment recording and deletion, plus the values derived on read.

use crate::aggregate::percent_of;
use crate::emi::compute_emi;
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::{EmiPayment, Loan, LoanStatus};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

impl Ledger {
    pub fn create_loan(
        &mut self,
        name: &str,
        principal: Decimal,
        rate: Decimal,
        tenure: u32,
        start_date: NaiveDate,
    ) -> &Loan {
        let loan = Loan {
            id: self.next_id(),
            name: name.to_string(),
            principal,
            rate,
            tenure,
            start_date,
            emi: compute_emi(principal, rate, tenure),
            paid_amount: Decimal::ZERO,
        };
        debug!(id = loan.id, emi = %loan.emi, "loan created");
        self.emi_payments.insert(loan.id, Vec::new());
        self.loans.push(loan);
        &self.loans[self.loans.len() - 1]
    }

    pub fn loan(&self, loan_id: i64) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == loan_id)
    }

    /// Appends a payment and adds it to the loan's paid amount. Payments past
    /// the principal are accepted; the due amount simply goes negative.
    pub fn record_payment(
        &mut self,
        loan_id: i64,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<&Loan, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(amount.to_string()));
        }
        let idx = self
            .loans
            .iter()
            .position(|l| l.id == loan_id)
            .ok_or(LedgerError::LoanNotFound(loan_id))?;
        let loan = &mut self.loans[idx];
        loan.paid_amount = loan
            .paid_amount
            .checked_add(amount)
            .ok_or_else(|| LedgerError::AmountOverflow(amount.to_string()))?;
        if loan.paid_amount > loan.principal {
            warn!(loan_id, paid = %loan.paid_amount, principal = %loan.principal, "loan overpaid");
        }
        self.emi_payments
            .entry(loan_id)
            .or_default()
            .push(EmiPayment { date, amount });
        debug!(loan_id, amount = %amount, "payment recorded");
        Ok(&self.loans[idx])
    }

    /// Removes the loan together with its payment history. Unknown ids are a no-op.
    pub fn delete_loan(&mut self, loan_id: i64) -> Option<Loan> {
        let idx = self.loans.iter().position(|l| l.id == loan_id)?;
        self.emi_payments.remove(&loan_id);
        debug!(loan_id, "loan deleted");
        Some(self.loans.remove(idx))
    }

    pub fn payments(&self, loan_id: i64) -> &[EmiPayment] {
        self.emi_payments
            .get(&loan_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Loan {
    pub fn status(&self) -> LoanStatus {
        derived_status(self)
    }
}

pub fn derived_status(loan: &Loan) -> LoanStatus {
    let due_amount = loan.principal.saturating_sub(loan.paid_amount);
    let percent_paid = if loan.principal <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        percent_of(loan.paid_amount, loan.principal)
    };
    LoanStatus {
        due_amount,
        percent_paid,
        end_date: loan.start_date.checked_add_months(Months::new(loan.tenure)),
        overpaid: due_amount < Decimal::ZERO,
    }
}
