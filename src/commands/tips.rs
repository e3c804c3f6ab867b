// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::analytics;
use crate::store::JsonStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &JsonStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let (_user, txs) = super::user_transactions(store)?;
    let tips = analytics::saving_tips(&txs, Utc::now().date_naive());
    if !maybe_print_json(json_flag, jsonl_flag, &tips)? {
        let rows: Vec<Vec<String>> = tips
            .iter()
            .map(|t| {
                vec![
                    t.priority.to_string(),
                    t.title.clone(),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Priority", "Tip", "Details"], rows)
        );
    }
    Ok(())
}
