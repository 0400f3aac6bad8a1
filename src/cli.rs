// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON"))
        .arg(arg!(--jsonl "Print as JSON lines"))
}

fn window_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(--window <WINDOW> "Time window: all|month|year|custom")
            .required(false)
            .default_value("all"),
    )
    .arg(arg!(--month <MONTH> "Month for --window custom (YYYY-MM)").required(false))
}

fn type_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .value_name("TYPE")
        .help("income|expense|saving|investment")
        .required(required)
}

fn force_flag(help: &'static str) -> Arg {
    Arg::new("force")
        .long("force")
        .action(ArgAction::SetTrue)
        .help(help)
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record, list and delete transactions")
        .subcommand(
            Command::new("add")
                .about("Add a transaction")
                .arg(arg!(--date <DATE> "Date (YYYY-MM-DD), defaults to today").required(false))
                .arg(type_arg(true))
                .arg(arg!(--category <CATEGORY> "Main category").required(true))
                .arg(
                    Arg::new("sub-category")
                        .long("sub-category")
                        .value_name("SUB_CATEGORY")
                        .help("Sub-category")
                        .required(false),
                )
                .arg(arg!(--amount <AMOUNT> "Amount (non-negative)").required(true))
                .arg(arg!(--description <TEXT> "Free text").required(false))
                .arg(arg!(--strict "Reject categories outside the built-in list")),
        )
        .subcommand(json_flags(window_args(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(type_arg(false))
                .arg(arg!(--search <REGEX> "Match category, sub-category or description").required(false))
                .arg(
                    arg!(--limit <N> "Show at most N rows")
                        .required(false)
                        .value_parser(value_parser!(usize)),
                ),
        )))
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction (also removed from the synced sheet)")
                .arg(arg!(<id> "Transaction id").value_parser(value_parser!(i64))),
        )
}

fn loan_cmd() -> Command {
    Command::new("loan")
        .about("Track loans and EMI payments")
        .subcommand(
            Command::new("add")
                .about("Add a loan; the EMI is computed and stored")
                .arg(arg!(--name <NAME> "Label").required(true))
                .arg(arg!(--principal <AMOUNT> "Borrowed amount").required(true))
                .arg(arg!(--rate <PERCENT> "Annual interest rate, e.g. 7.5").required(true))
                .arg(
                    arg!(--tenure <MONTHS> "Tenure in months")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                )
                .arg(arg!(--start <DATE> "Start date (YYYY-MM-DD), defaults to today").required(false)),
        )
        .subcommand(json_flags(Command::new("list").about("List loans with balances")))
        .subcommand(
            Command::new("pay")
                .about("Record an EMI payment")
                .arg(arg!(<id> "Loan id").value_parser(value_parser!(i64)))
                .arg(arg!(--amount <AMOUNT> "Amount paid, defaults to the EMI").required(false))
                .arg(arg!(--date <DATE> "Payment date (YYYY-MM-DD), defaults to today").required(false)),
        )
        .subcommand(json_flags(
            Command::new("payments")
                .about("Show the payment history of a loan")
                .arg(arg!(<id> "Loan id").value_parser(value_parser!(i64))),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a loan and its payments")
                .arg(arg!(<id> "Loan id").value_parser(value_parser!(i64))),
        )
        .subcommand(json_flags(
            Command::new("calc")
                .about("Preview the EMI for a loan without saving it")
                .arg(arg!(--principal <AMOUNT> "Borrowed amount").required(true))
                .arg(arg!(--rate <PERCENT> "Annual interest rate").required(true))
                .arg(
                    arg!(--tenure <MONTHS> "Tenure in months")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                ),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Monthly, yearly and category reports")
        .subcommand(json_flags(Command::new("monthly").about("Totals per calendar month")))
        .subcommand(json_flags(Command::new("yearly").about("Totals per calendar year")))
        .subcommand(json_flags(
            Command::new("category")
                .about("Totals per type and category")
                .arg(arg!(--month <MONTH> "Limit to one month (YYYY-MM)").required(false)),
        ))
}

pub fn build_cli() -> Command {
    Command::new("trackmoney")
        .about("Track income, expenses, savings, investments and loans")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(tx_cmd())
        .subcommand(loan_cmd())
        .subcommand(json_flags(window_args(
            Command::new("dashboard")
                .about("Totals, rates and category split for a time window")
                .arg(
                    arg!(--recent <N> "How many recent transactions to show")
                        .required(false)
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                ),
        )))
        .subcommand(report_cmd())
        .subcommand(
            Command::new("category").about("Built-in category list").subcommand(
                Command::new("list")
                    .about("Show categories and sub-categories")
                    .arg(type_arg(false)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export all transactions")
                    .arg(
                        arg!(--format <FORMAT> "csv|json")
                            .required(false)
                            .default_value("csv"),
                    )
                    .arg(arg!(--out <PATH> "Output file, defaults to transactions_<today>.csv").required(false)),
            )
            .subcommand(
                Command::new("state")
                    .about("Back up the whole ledger as JSON")
                    .arg(arg!(--out <PATH> "Output file, defaults to trackmoney_backup_<today>.json").required(false)),
            ),
        )
        .subcommand(
            Command::new("import").about("Restore data").subcommand(
                Command::new("state")
                    .about("Replace the ledger with a JSON backup")
                    .arg(arg!(<path> "Backup file"))
                    .arg(force_flag("Replace a ledger that already has data")),
            ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete every transaction and loan")
                .arg(force_flag("Confirm the reset")),
        )
        .subcommand(
            Command::new("sync")
                .about("Google Sheets sync")
                .subcommand(Command::new("push").about("Send the whole ledger to the sheet")),
        )
        .subcommand(
            Command::new("config")
                .about("Settings (sync_url, currency_symbol)")
                .subcommand(
                    Command::new("set")
                        .arg(arg!(<key> "Setting name"))
                        .arg(arg!(<value> "Setting value")),
                )
                .subcommand(Command::new("get").arg(arg!(<key> "Setting name")))
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("sample").about("Sample data").subcommand(
                Command::new("load")
                    .about("Load the sample ledger (refuses to overwrite data)")
                    .arg(force_flag("Replace the existing ledger")),
            ),
        )
}
