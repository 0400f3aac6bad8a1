// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxType;
use crate::taxonomy;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let kinds: Vec<TxType> = match sub.get_one::<String>("type") {
            Some(s) => vec![s.parse()?],
            None => TxType::ALL.to_vec(),
        };
        let mut data = Vec::new();
        for kind in kinds {
            for g in taxonomy::categories(kind) {
                data.push(vec![
                    kind.to_string(),
                    g.name.to_string(),
                    g.sub_categories.join(", "),
                ]);
            }
        }
        println!("{}", pretty_table(&["Type", "Category", "Sub-categories"], data));
    }
    Ok(())
}
