// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{load_state, save_state};
use crate::ledger::Ledger;
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("state", sub)) => import_state(conn, sub),
        _ => Ok(()),
    }
}

/// Replaces the ledger with a backup file. Accepts both `export state`
/// output and the blob saved by the browser app (numeric amounts).
fn import_state(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open backup {}", path))?;
    let incoming: Ledger = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a ledger backup", path))?;

    let current = load_state(conn)?;
    if !current.is_empty() && !sub.get_flag("force") {
        bail!("Ledger already has data; pass --force to replace it");
    }
    save_state(conn, &incoming)?;
    info!(
        path,
        transactions = incoming.transactions.len(),
        loans = incoming.loans.len(),
        "ledger restored"
    );
    println!(
        "Imported {} transactions and {} loans from {}",
        incoming.transactions.len(),
        incoming.loans.len(),
        path
    );
    Ok(())
}

/// Empties the ledger; settings are kept.
pub fn reset(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("force") {
        bail!("This deletes every transaction and loan; pass --force to confirm");
    }
    save_state(conn, &Ledger::new())?;
    info!("ledger cleared");
    println!("All transactions and loans deleted.");
    Ok(())
}
