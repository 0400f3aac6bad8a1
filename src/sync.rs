// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pushes ledger snapshots and single deletions to a Google Apps Script web
//! app that writes them into a spreadsheet.
//!
//! Sync only reads the ledger. Failures are reported to the caller and never
//! retried; local state is the same whether or not the remote side got the data.

use crate::ledger::Ledger;
use crate::models::{EmiPayment, Loan, Transaction};
use crate::sheets::{self, SheetTables};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error as _;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const SYNC_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker left in the URL of an Apps Script deployment that was never set up.
const PLACEHOLDER_MARKER: &str = "YOUR_DEPLOYMENT_ID";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("sync URL is not configured (set it with `trackmoney config set sync_url <URL>`)")]
    NotConfigured,
    #[error("sync timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("sync failed: {0}")]
    Transport(String),
    #[error("remote side rejected the sync: {0}")]
    Rejected(String),
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SyncRequest<'a> {
    #[serde(rename_all = "camelCase")]
    SyncTransactions {
        transactions: &'a [Transaction],
        loans: &'a [Loan],
        emi_payments: &'a BTreeMap<i64, Vec<EmiPayment>>,
        sheets: SheetTables,
    },
    DeleteTransaction { transaction: &'a Transaction },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncAck {
    pub status: u16,
    pub message: Option<String>,
}

/// Anything that can take a sync request and say whether it landed.
pub trait SyncTarget {
    fn push(&self, request: &SyncRequest<'_>) -> Result<SyncAck, SyncError>;
}

#[derive(Debug, Deserialize)]
struct RemoteReply {
    success: Option<bool>,
    message: Option<String>,
    error: Option<String>,
}

pub struct AppsScriptClient {
    url: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

impl AppsScriptClient {
    pub fn new(url: &str) -> Result<Self, SyncError> {
        Self::with_timeout(url, SYNC_TIMEOUT)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, SyncError> {
        let url = url.trim();
        if url.is_empty() || url.contains(PLACEHOLDER_MARKER) {
            return Err(SyncError::NotConfigured);
        }
        let client = crate::utils::http_client(timeout)
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        Self::with_client(url, client, timeout)
    }

    /// Uses a caller-built client; `timeout` should match the one it was built with.
    pub fn with_client(
        url: &str,
        client: reqwest::blocking::Client,
        timeout: Duration,
    ) -> Result<Self, SyncError> {
        let url = url.trim();
        if url.is_empty() || url.contains(PLACEHOLDER_MARKER) {
            return Err(SyncError::NotConfigured);
        }
        Ok(Self {
            url: url.to_string(),
            timeout,
            client,
        })
    }

    fn classify(&self, err: reqwest::Error) -> SyncError {
        if err.is_timeout() || caused_by_timeout(&err) {
            SyncError::Timeout(self.timeout)
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

fn caused_by_timeout(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(e) = source {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return true;
            }
        }
        source = e.source();
    }
    false
}

impl SyncTarget for AppsScriptClient {
    fn push(&self, request: &SyncRequest<'_>) -> Result<SyncAck, SyncError> {
        debug!(url = %self.url, "posting sync request");
        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(|e| self.classify(e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::Transport(format!("HTTP {status}")));
        }
        let body = resp.text().map_err(|e| self.classify(e))?;
        match serde_json::from_str::<RemoteReply>(&body) {
            Ok(RemoteReply {
                success: Some(false),
                message,
                error,
            }) => Err(SyncError::Rejected(
                error
                    .or(message)
                    .unwrap_or_else(|| "no details given".to_string()),
            )),
            Ok(reply) => Ok(SyncAck {
                status: status.as_u16(),
                message: reply.message,
            }),
            // Apps Script often answers with an HTML redirect page; a 2xx is all we get.
            Err(_) => Ok(SyncAck {
                status: status.as_u16(),
                message: None,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    NothingToSync,
    Synced {
        transactions: usize,
        loans: usize,
        ack: SyncAck,
    },
}

pub fn sync_ledger(
    target: &dyn SyncTarget,
    ledger: &Ledger,
    now: DateTime<Utc>,
) -> Result<SyncOutcome, SyncError> {
    if ledger.is_empty() {
        return Ok(SyncOutcome::NothingToSync);
    }
    let request = SyncRequest::SyncTransactions {
        transactions: &ledger.transactions,
        loans: &ledger.loans,
        emi_payments: &ledger.emi_payments,
        sheets: sheets::render(ledger, now),
    };
    match target.push(&request) {
        Ok(ack) => {
            info!(
                transactions = ledger.transactions.len(),
                loans = ledger.loans.len(),
                status = ack.status,
                "ledger synced"
            );
            Ok(SyncOutcome::Synced {
                transactions: ledger.transactions.len(),
                loans: ledger.loans.len(),
                ack,
            })
        }
        Err(e) => {
            warn!(error = %e, "ledger sync failed");
            Err(e)
        }
    }
}

pub fn sync_deletion(target: &dyn SyncTarget, transaction: &Transaction) -> Result<SyncAck, SyncError> {
    target
        .push(&SyncRequest::DeleteTransaction { transaction })
        .inspect(|_| info!(id = transaction.id, "deletion synced"))
        .inspect_err(|e| warn!(id = transaction.id, error = %e, "deletion sync failed"))
}
