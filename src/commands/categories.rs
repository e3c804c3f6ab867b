// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::reference::CATEGORIES;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub),
        _ => Ok(()),
    }
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &*CATEGORIES)? {
        let rows: Vec<Vec<String>> = CATEGORIES
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.name.clone(),
                    c.kind.to_string(),
                    c.icon.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Type", "Icon"], rows));
    }
    Ok(())
}
