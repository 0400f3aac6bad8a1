// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::TimeWindow;
use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::sync::Once;
use std::time::Duration;

const UA: &str = concat!(
    "trackmoney/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/trackmoney)"
);

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const SYNC_URL_ENV: &str = "TRACKMONEY_SYNC_URL";

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("trackmoney=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parses `YYYY-MM` into `(year, month)`.
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((d.year(), d.month()))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_window(window: &str, month: Option<&str>) -> Result<TimeWindow> {
    match (window.trim().to_ascii_lowercase().as_str(), month) {
        ("all", _) => Ok(TimeWindow::AllTime),
        ("month", _) => Ok(TimeWindow::CurrentMonth),
        ("year", _) => Ok(TimeWindow::CurrentYear),
        ("custom", Some(m)) => {
            let (year, month) = parse_month(m)?;
            Ok(TimeWindow::CustomMonth { year, month })
        }
        ("custom", None) => bail!("--window custom needs --month YYYY-MM"),
        (other, _) => bail!("Unknown window '{}' (use all|month|year|custom)", other),
    }
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, crate::emi::round_money(*d))
}

/// Dashboard rates use one decimal place, loan progress two.
pub fn fmt_percent(d: &Decimal, dp: u32) -> String {
    format!("{:.*}%", dp as usize, d.round_dp(dp))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn list_settings(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare("SELECT key, value FROM settings ORDER BY key")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn currency_symbol(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "currency_symbol")?
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
}

/// Environment wins over the stored setting.
pub fn sync_url(conn: &Connection) -> Result<Option<String>> {
    if let Ok(url) = std::env::var(SYNC_URL_ENV) {
        if !url.trim().is_empty() {
            return Ok(Some(url));
        }
    }
    get_setting(conn, "sync_url")
}
