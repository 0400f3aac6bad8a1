// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::load_state;
use crate::report::{PeriodRow, category_report, monthly_report, yearly_report};
use crate::utils::{currency_symbol, fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => periods(conn, sub, "Month", monthly_report)?,
        Some(("yearly", sub)) => periods(conn, sub, "Year", yearly_report)?,
        Some(("category", sub)) => by_category(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn periods(
    conn: &Connection,
    sub: &clap::ArgMatches,
    heading: &str,
    build: fn(&[crate::models::Transaction]) -> Vec<PeriodRow>,
) -> Result<()> {
    let ledger = load_state(conn)?;
    let data = build(&ledger.transactions);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let rows = data
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                fmt_money(&r.totals.income, &symbol),
                fmt_money(&r.totals.expense, &symbol),
                fmt_money(&r.totals.saving, &symbol),
                fmt_money(&r.totals.investment, &symbol),
                fmt_money(&r.net_savings, &symbol),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[heading, "Income", "Expense", "Saving", "Investment", "Net savings"],
            rows,
        )
    );
    Ok(())
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let ledger = load_state(conn)?;
    let data = category_report(&ledger.transactions, month);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let rows = data
        .iter()
        .map(|c| vec![c.label.clone(), fmt_money(&c.amount, &symbol)])
        .collect();
    println!("{}", pretty_table(&["Type - Category", "Amount"], rows));
    Ok(())
}
