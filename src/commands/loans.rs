// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::today;
use crate::db::{load_state, save_state};
use crate::emi;
use crate::ledger::Ledger;
use crate::utils::{
    currency_symbol, fmt_money, fmt_percent, maybe_print_json, parse_date, parse_decimal,
    pretty_table,
};
use anyhow::{Result, bail};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, sub)?;
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("pay", sub)) => pay(conn, sub)?,
        Some(("payments", sub)) => payments(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        Some(("calc", sub)) => calc(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<i64> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let principal = parse_decimal(sub.get_one::<String>("principal").unwrap())?;
    let rate = parse_decimal(sub.get_one::<String>("rate").unwrap())?;
    let tenure = *sub.get_one::<u32>("tenure").unwrap();
    let start = match sub.get_one::<String>("start") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    if principal <= Decimal::ZERO {
        bail!("Principal must be positive (got {})", principal);
    }
    if rate < Decimal::ZERO {
        bail!("Rate must not be negative (got {})", rate);
    }
    if tenure == 0 {
        bail!("Tenure must be at least one month");
    }

    let mut ledger = load_state(conn)?;
    let loan = ledger.create_loan(&name, principal, rate, tenure, start);
    let id = loan.id;
    println!(
        "Added loan '{}' id={} EMI={}",
        loan.name,
        id,
        fmt_money(&loan.emi, &currency_symbol(conn)?)
    );
    save_state(conn, &ledger)?;
    Ok(id)
}

const LOAN_PROGRESS_DP: u32 = 2;

#[derive(Serialize)]
pub struct LoanRow {
    pub id: i64,
    pub name: String,
    pub principal: Decimal,
    pub rate: Decimal,
    pub tenure: u32,
    pub start_date: String,
    pub end_date: String,
    pub emi: Decimal,
    pub paid_amount: Decimal,
    pub due_amount: Decimal,
    pub percent_paid: Decimal,
    pub overpaid: bool,
}

pub fn loan_rows(ledger: &Ledger) -> Vec<LoanRow> {
    ledger
        .loans
        .iter()
        .map(|l| {
            let status = l.status();
            LoanRow {
                id: l.id,
                name: l.name.clone(),
                principal: l.principal,
                rate: l.rate,
                tenure: l.tenure,
                start_date: l.start_date.to_string(),
                end_date: status.end_date.map(|d| d.to_string()).unwrap_or_default(),
                emi: l.emi,
                paid_amount: l.paid_amount,
                due_amount: status.due_amount,
                percent_paid: status.percent_paid,
                overpaid: status.overpaid,
            }
        })
        .collect()
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = load_state(conn)?;
    let data = loan_rows(&ledger);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No loans added yet.");
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let rows = data
        .iter()
        .map(|r| {
            let mut paid = fmt_percent(&r.percent_paid, LOAN_PROGRESS_DP);
            if r.overpaid {
                paid.push_str(" (overpaid)");
            }
            vec![
                r.id.to_string(),
                r.name.clone(),
                fmt_money(&r.principal, &symbol),
                format!("{}% p.a.", r.rate),
                fmt_money(&r.emi, &symbol),
                fmt_money(&r.paid_amount, &symbol),
                fmt_money(&r.due_amount, &symbol),
                paid,
                r.end_date.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Name", "Principal", "Rate", "EMI", "Paid", "Due", "Progress", "Ends"],
            rows,
        )
    );
    Ok(())
}

fn pay(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let mut ledger = load_state(conn)?;
    let amount = match sub.get_one::<String>("amount") {
        Some(s) => parse_decimal(s)?,
        None => match ledger.loan(id) {
            Some(l) => l.emi,
            None => bail!(crate::error::LedgerError::LoanNotFound(id)),
        },
    };
    let loan = ledger.record_payment(id, date, amount)?;
    let status = loan.status();
    let symbol = currency_symbol(conn)?;
    println!(
        "Recorded {} for '{}': paid {}, due {}",
        fmt_money(&amount, &symbol),
        loan.name,
        fmt_money(&loan.paid_amount, &symbol),
        fmt_money(&status.due_amount, &symbol)
    );
    if status.overpaid {
        println!("Note: payments now exceed the principal.");
    }
    save_state(conn, &ledger)?;
    Ok(())
}

fn payments(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let ledger = load_state(conn)?;
    if ledger.loan(id).is_none() {
        bail!(crate::error::LedgerError::LoanNotFound(id));
    }
    let history = ledger.payments(id);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &history)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let rows = history
        .iter()
        .map(|p| vec![p.date.to_string(), fmt_money(&p.amount, &symbol)])
        .collect();
    println!("{}", pretty_table(&["Date", "Amount"], rows));
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut ledger = load_state(conn)?;
    match ledger.delete_loan(id) {
        Some(loan) => {
            save_state(conn, &ledger)?;
            println!("Deleted loan '{}'", loan.name);
        }
        None => println!("No loan with id {}", id),
    }
    Ok(())
}

fn calc(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let principal = parse_decimal(sub.get_one::<String>("principal").unwrap())?;
    let rate = parse_decimal(sub.get_one::<String>("rate").unwrap())?;
    let tenure = *sub.get_one::<u32>("tenure").unwrap();
    let q = emi::quote(principal, rate, tenure);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &q)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    println!(
        "{}",
        pretty_table(
            &["EMI", "Total payable", "Total interest"],
            vec![vec![
                fmt_money(&q.emi, &symbol),
                fmt_money(&q.total_payable, &symbol),
                fmt_money(&q.total_interest, &symbol),
            ]],
        )
    );
    Ok(())
}
