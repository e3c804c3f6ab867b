// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::analytics;
use crate::store::JsonStore;

pub fn handle(store: &JsonStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(store, sub),
        _ => Ok(()),
    }
}

fn export_csv(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let (_user, mut txs) = super::user_transactions(store)?;
    txs.sort_by(|a, b| a.date.cmp(&b.date));
    let csv_text = analytics::export_csv(&txs)?;
    match sub.get_one::<String>("out") {
        Some(path) => {
            std::fs::write(path, &csv_text)
                .with_context(|| format!("Failed to write {}", path))?;
            println!("Exported {} transaction(s) to {}", txs.len(), path);
        }
        None => print!("{}", csv_text),
    }
    Ok(())
}
