// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::load_state;
use crate::sync::{AppsScriptClient, SyncError, SyncOutcome, SyncTarget, sync_ledger};
use crate::utils::sync_url;
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("push", _)) = m.subcommand() {
        let url = sync_url(conn)?.ok_or(SyncError::NotConfigured)?;
        let client = AppsScriptClient::new(&url)?;
        push(conn, &client)?;
    }
    Ok(())
}

pub fn push(conn: &Connection, target: &dyn SyncTarget) -> Result<SyncOutcome> {
    let ledger = load_state(conn)?;
    println!("Syncing data to Google Sheets...");
    let outcome = sync_ledger(target, &ledger, Utc::now())?;
    match &outcome {
        SyncOutcome::NothingToSync => {
            println!("No data to sync. Add some transactions or loans first!");
        }
        SyncOutcome::Synced {
            transactions,
            loans,
            ack,
        } => {
            println!(
                "Synced {} transactions and {} loans to Google Sheets.",
                transactions, loans
            );
            if let Some(msg) = &ack.message {
                println!("Remote: {}", msg);
            }
        }
    }
    Ok(outcome)
}
