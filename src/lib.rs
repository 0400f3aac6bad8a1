// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod db;
pub mod emi;
pub mod error;
pub mod ledger;
pub mod loans;
pub mod models;
pub mod report;
pub mod sheets;
pub mod sync;
pub mod taxonomy;
pub mod utils;
