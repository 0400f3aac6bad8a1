// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Summary, TimeWindow, filter, recent, summarize, today};
use crate::db::load_state;
use crate::utils::{
    currency_symbol, fmt_money, fmt_percent, maybe_print_json, parse_window, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;

fn window_of(sub: &clap::ArgMatches) -> Result<TimeWindow> {
    parse_window(
        sub.get_one::<String>("window").map(String::as_str).unwrap_or("all"),
        sub.get_one::<String>("month").map(String::as_str),
    )
}

pub fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<Summary> {
    let ledger = load_state(conn)?;
    Ok(summarize(&ledger.transactions, window_of(sub)?, today()))
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ledger = load_state(conn)?;
    let window = window_of(sub)?;
    let today = today();
    let s = summarize(&ledger.transactions, window, today);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let symbol = currency_symbol(conn)?;
    let t = &s.totals;

    println!(
        "{}",
        pretty_table(
            &["", "Amount", "% of income"],
            vec![
                vec!["Income".into(), fmt_money(&t.income, &symbol), String::new()],
                vec![
                    "Expenses".into(),
                    fmt_money(&t.expense, &symbol),
                    fmt_percent(&s.expense_rate, 1),
                ],
                vec![
                    "Savings".into(),
                    fmt_money(&t.saving, &symbol),
                    fmt_percent(&s.saving_rate, 1),
                ],
                vec![
                    "Investments".into(),
                    fmt_money(&t.investment, &symbol),
                    fmt_percent(&s.investment_rate, 1),
                ],
                vec![
                    "Savings + investments".into(),
                    fmt_money(&s.combined_savings, &symbol),
                    fmt_percent(&s.combined_saving_rate, 1),
                ],
            ],
        )
    );

    for (title, cats) in [
        ("Expenses by category", &s.expense_by_category),
        ("Income by category", &s.income_by_category),
    ] {
        if cats.is_empty() {
            continue;
        }
        let rows = cats
            .iter()
            .map(|c| vec![c.label.clone(), fmt_money(&c.amount, &symbol)])
            .collect();
        println!("{}", pretty_table(&[title, "Amount"], rows));
    }

    let n = sub.get_one::<usize>("recent").copied().unwrap_or(10);
    if n == 0 {
        return Ok(());
    }
    let filtered = filter(&ledger.transactions, window, today);
    if filtered.is_empty() {
        println!("No transactions for this period.");
        return Ok(());
    }
    let rows = recent(filtered.iter().copied(), n)
        .into_iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.category.clone(),
                t.sub_category.clone(),
                format!("{}{}", t.r#type.sign(), fmt_money(&t.amount, &symbol)),
                t.id.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Sub-category", "Amount", "Id"], rows)
    );
    Ok(())
}
