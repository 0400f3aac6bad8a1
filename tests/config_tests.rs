// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tempfile::tempdir;
use trackmoney::{
    cli,
    commands::{config, sample},
    db,
    utils::{DEFAULT_CURRENCY_SYMBOL, currency_symbol, get_setting, list_settings},
};

fn conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_config(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["trackmoney", "config"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, config_m) = matches.subcommand().unwrap();
    config::handle(conn, config_m)
}

#[test]
fn set_get_and_overwrite() {
    let conn = conn();
    assert_eq!(currency_symbol(&conn).unwrap(), DEFAULT_CURRENCY_SYMBOL);

    run_config(&conn, &["set", "currency_symbol", "$"]).unwrap();
    assert_eq!(currency_symbol(&conn).unwrap(), "$");

    run_config(&conn, &["set", "currency_symbol", " € "]).unwrap();
    assert_eq!(currency_symbol(&conn).unwrap(), "€");

    run_config(
        &conn,
        &["set", "sync_url", "https://script.google.com/macros/s/abc/exec"],
    )
    .unwrap();
    assert_eq!(
        get_setting(&conn, "sync_url").unwrap().as_deref(),
        Some("https://script.google.com/macros/s/abc/exec")
    );

    let all = list_settings(&conn).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].0, "currency_symbol");

    run_config(&conn, &["get", "sync_url"]).unwrap();
    run_config(&conn, &["list"]).unwrap();
}

#[test]
fn unknown_key_is_rejected() {
    let conn = conn();
    assert!(run_config(&conn, &["set", "theme", "dark"]).is_err());
    assert!(get_setting(&conn, "theme").unwrap().is_none());
}

#[test]
fn ledger_survives_reopening_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trackmoney.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        db::init_schema(&conn).unwrap();
        db::save_state(&conn, &sample::sample_ledger().unwrap()).unwrap();
    }
    let conn = Connection::open(&path).unwrap();
    db::init_schema(&conn).unwrap();
    let ledger = db::load_state(&conn).unwrap();
    assert_eq!(ledger, sample::sample_ledger().unwrap());
}
