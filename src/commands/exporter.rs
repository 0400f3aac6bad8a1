// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::today;
use crate::db::load_state;
use crate::models::Transaction;
use anyhow::{Result, bail};
use rusqlite::Connection;
use serde_json::json;
use std::io::Write;

pub const CSV_HEADER: [&str; 6] = ["Date", "Type", "Category", "SubCategory", "Description", "Amount"];

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        Some(("state", sub)) => export_state(conn, sub),
        _ => Ok(()),
    }
}

/// One row per transaction in stored order; the csv writer quotes fields
/// that contain commas, quotes or newlines.
pub fn write_csv<W: Write>(out: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for t in txns {
        wtr.write_record([
            t.date.to_string(),
            t.r#type.to_string(),
            t.category.clone(),
            t.sub_category.clone(),
            t.description.clone().unwrap_or_default(),
            t.amount.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => format!("transactions_{}.{}", today(), fmt),
    };
    let ledger = load_state(conn)?;

    if fmt == "csv" {
        let file = std::fs::File::create(&out)?;
        write_csv(file, &ledger.transactions)?;
    } else {
        let items: Vec<_> = ledger
            .transactions
            .iter()
            .map(|t| {
                json!({
                    "date": t.date, "type": t.r#type, "category": t.category,
                    "subCategory": t.sub_category, "description": t.description,
                    "amount": t.amount
                })
            })
            .collect();
        std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
    }
    println!(
        "Exported {} transactions to {}",
        ledger.transactions.len(),
        out
    );
    Ok(())
}

/// Whole ledger in the stored shape, loadable with `import state`.
fn export_state(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => format!("trackmoney_backup_{}.json", today()),
    };
    let ledger = load_state(conn)?;
    std::fs::write(&out, serde_json::to_string_pretty(&ledger)?)?;
    println!(
        "Backed up {} transactions and {} loans to {}",
        ledger.transactions.len(),
        ledger.loans.len(),
        out
    );
    Ok(())
}
