// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::Serialize;

/// Money values are shown and stored with two decimal places.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed monthly installment for a flat-rate loan:
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly fractional rate.
///
/// Returns zero when any input is non-positive (an incomplete form, not an
/// error). When `(1 + r)^n` leaves the decimal range the installment is the
/// limit `P * r`.
pub fn compute_emi(principal: Decimal, annual_rate_percent: Decimal, tenure_months: u32) -> Decimal {
    if principal <= Decimal::ZERO || annual_rate_percent <= Decimal::ZERO || tenure_months == 0 {
        return Decimal::ZERO;
    }
    let r = annual_rate_percent / Decimal::from(12) / Decimal::ONE_HUNDRED;
    let Some(monthly_interest) = principal.checked_mul(r) else {
        return Decimal::ZERO;
    };
    // growth / (growth - 1), which tends to 1 for long tenures
    let factor = (Decimal::ONE + r)
        .checked_powu(u64::from(tenure_months))
        .and_then(|growth| growth.checked_div(growth - Decimal::ONE))
        .unwrap_or(Decimal::ONE);
    monthly_interest
        .checked_mul(factor)
        .map(round_money)
        .unwrap_or(Decimal::ZERO)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiQuote {
    pub emi: Decimal,
    pub total_payable: Decimal,
    pub total_interest: Decimal,
}

/// EMI plus what the loan costs over its whole tenure.
pub fn quote(principal: Decimal, annual_rate_percent: Decimal, tenure_months: u32) -> EmiQuote {
    let emi = compute_emi(principal, annual_rate_percent, tenure_months);
    if emi.is_zero() {
        return EmiQuote {
            emi,
            total_payable: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        };
    }
    let total_payable = emi.saturating_mul(Decimal::from(tenure_months));
    EmiQuote {
        emi,
        total_payable,
        total_interest: total_payable.saturating_sub(principal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn home_loan_emi() {
        assert_eq!(compute_emi(d("5000000"), d("7.5"), 240), d("40279.66"));
    }

    #[test]
    fn car_loan_emi() {
        assert_eq!(compute_emi(d("1500000"), d("8.5"), 60), d("30774.80"));
    }

    #[test]
    fn one_year_at_twelve_percent() {
        assert_eq!(compute_emi(d("100000"), d("12"), 12), d("8884.88"));
    }

    #[test]
    fn degenerate_inputs_give_zero() {
        assert_eq!(compute_emi(Decimal::ZERO, d("7.5"), 240), Decimal::ZERO);
        assert_eq!(compute_emi(d("-100"), d("7.5"), 240), Decimal::ZERO);
        assert_eq!(compute_emi(d("5000"), Decimal::ZERO, 240), Decimal::ZERO);
        assert_eq!(compute_emi(d("5000"), d("-1"), 240), Decimal::ZERO);
        assert_eq!(compute_emi(d("5000"), d("7.5"), 0), Decimal::ZERO);
    }

    #[test]
    fn single_month_repays_principal_plus_one_month_interest() {
        // r = 1% monthly
        assert_eq!(compute_emi(d("1000"), d("12"), 1), d("1010.00"));
    }

    #[test]
    fn very_long_tenure_tends_to_monthly_interest() {
        // (1.03)^3000 is outside the decimal range
        assert_eq!(compute_emi(d("100000"), d("36"), 3000), d("3000.00"));
    }

    #[test]
    fn quote_totals() {
        let q = quote(d("100000"), d("12"), 12);
        assert_eq!(q.emi, d("8884.88"));
        assert_eq!(q.total_payable, d("106618.56"));
        assert_eq!(q.total_interest, d("6618.56"));
    }

    #[test]
    fn quote_for_incomplete_input_is_zero() {
        let q = quote(d("100000"), Decimal::ZERO, 12);
        assert_eq!(q.total_payable, Decimal::ZERO);
        assert_eq!(q.total_interest, Decimal::ZERO);
    }
}
