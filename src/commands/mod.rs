// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod loans;
pub mod dashboard;
pub mod reports;
pub mod categories;
pub mod exporter;
pub mod importer;
pub mod sync;
pub mod config;
pub mod sample;
