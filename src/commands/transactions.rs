// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{filter, today};
use crate::db::{load_state, save_state};
use crate::models::{NewTransaction, TxType};
use crate::sync::{AppsScriptClient, sync_deletion};
use crate::taxonomy::{self, CategoryCheck};
use crate::utils::{
    currency_symbol, fmt_money, maybe_print_json, parse_date, parse_decimal, parse_window,
    pretty_table, sync_url,
};
use anyhow::{Context, Result};
use regex::Regex;
use rusqlite::Connection;
use serde::Serialize;
use tracing::warn;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, sub)?;
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<i64> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let kind: TxType = sub.get_one::<String>("type").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let sub_category = sub
        .get_one::<String>("sub-category")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").cloned();

    if sub.get_flag("strict") {
        taxonomy::require_known(kind, &category, &sub_category)?;
    } else {
        match taxonomy::check(kind, &category, &sub_category) {
            CategoryCheck::Known => {}
            CategoryCheck::UnknownCategory => {
                warn!(%kind, %category, "category not in the built-in list");
                println!("Note: '{}' is not a built-in {} category", category, kind);
            }
            CategoryCheck::UnknownSubCategory => {
                warn!(%category, %sub_category, "sub-category not in the built-in list");
                println!(
                    "Note: '{}' is not a built-in sub-category of '{}'",
                    sub_category, category
                );
            }
        }
    }

    let mut ledger = load_state(conn)?;
    let tx = ledger.add_transaction(NewTransaction {
        date,
        r#type: kind,
        category,
        sub_category,
        description,
        amount,
    })?;
    let id = tx.id;
    println!(
        "Recorded {} {} on {} ({} / {}) id={}",
        kind, tx.amount, tx.date, tx.category, tx.sub_category, id
    );
    save_state(conn, &ledger)?;
    Ok(id)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = currency_symbol(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.sub_category.clone(),
                    r.description.clone(),
                    format!("{}{}", r.sign, fmt_money(&r.amount, &symbol)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Category", "Sub-category", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub sub_category: String,
    pub description: String,
    pub amount: rust_decimal::Decimal,
    #[serde(skip)]
    pub sign: char,
}

/// Rows matching the list filters, most recently added first.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let ledger = load_state(conn)?;
    let window = parse_window(
        sub.get_one::<String>("window").map(String::as_str).unwrap_or("all"),
        sub.get_one::<String>("month").map(String::as_str),
    )?;
    let kind: Option<TxType> = match sub.get_one::<String>("type") {
        Some(s) => Some(s.parse()?),
        None => None,
    };
    let search = match sub.get_one::<String>("search") {
        Some(p) => Some(Regex::new(p).with_context(|| format!("Invalid pattern '{}'", p))?),
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let data = filter(&ledger.transactions, window, today())
        .into_iter()
        .rev()
        .filter(|t| kind.is_none_or(|k| t.r#type == k))
        .filter(|t| {
            search.as_ref().is_none_or(|re| {
                re.is_match(&t.category)
                    || re.is_match(&t.sub_category)
                    || t.description.as_deref().is_some_and(|d| re.is_match(d))
            })
        })
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            category: t.category.clone(),
            sub_category: t.sub_category.clone(),
            description: t.description.clone().unwrap_or_default(),
            amount: t.amount,
            sign: t.r#type.sign(),
        })
        .collect();
    Ok(data)
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut ledger = load_state(conn)?;
    let Some(removed) = ledger.delete_transaction(id) else {
        println!("No transaction with id {}", id);
        return Ok(());
    };
    save_state(conn, &ledger)?;
    println!("Deleted transaction {}", id);

    let Some(url) = sync_url(conn)? else {
        return Ok(());
    };
    let synced = AppsScriptClient::new(&url).and_then(|client| sync_deletion(&client, &removed));
    if let Err(e) = synced {
        println!(
            "Deleted locally, but the sheet was not updated ({}); remove the row by hand.",
            e
        );
    }
    Ok(())
}
