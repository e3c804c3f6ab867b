// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::reference::COUNTRIES;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &*COUNTRIES)? {
        let rows: Vec<Vec<String>> = COUNTRIES
            .iter()
            .map(|c| {
                vec![
                    c.code.clone(),
                    c.name.clone(),
                    c.currency.clone(),
                    c.currency_symbol.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Code", "Country", "Currency", "Symbol"], rows)
        );
    }
    Ok(())
}
