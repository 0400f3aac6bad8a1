// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_setting, list_settings, pretty_table, set_setting};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub const KNOWN_KEYS: [&str; 2] = ["sync_url", "currency_symbol"];

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            let value = sub.get_one::<String>("value").unwrap().trim();
            if !KNOWN_KEYS.iter().any(|k| *k == key) {
                bail!("Unknown setting '{}' (known: {})", key, KNOWN_KEYS.join(", "));
            }
            set_setting(conn, key, value)?;
            println!("{} = {}", key, value);
        }
        Some(("get", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            match get_setting(conn, key)? {
                Some(v) => println!("{}", v),
                None => println!("{} is not set", key),
            }
        }
        Some(("list", _)) => {
            let data = list_settings(conn)?
                .into_iter()
                .map(|(k, v)| vec![k, v])
                .collect();
            println!("{}", pretty_table(&["Key", "Value"], data));
        }
        _ => {}
    }
    Ok(())
}
