// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::models::{Transaction, TransactionPatch, TxKind};
use crate::reference;
use crate::store::JsonStore;
use crate::utils::{at_midnight, fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(store: &JsonStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub),
        Some(("list", sub)) => list(store, sub),
        Some(("edit", sub)) => edit(store, sub),
        Some(("rm", sub)) => rm(store, sub),
        _ => Ok(()),
    }
}

fn add(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let user = super::require_user(store)?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    if reference::category(&category).is_none() {
        log::warn!("category '{}' is not in the reference list; keeping it as-is", category);
    }
    let description = sub
        .get_one::<String>("description")
        .cloned()
        .unwrap_or_default();

    let tx = Transaction {
        id: Utc::now().timestamp_millis().to_string(),
        kind,
        amount,
        category,
        description,
        date: at_midnight(date),
        user_id: user.id,
    };
    store.append(&tx)?;
    println!(
        "Recorded {} {} '{}' on {} (id: {})",
        tx.kind,
        fmt_money(&tx.amount, &user.currency_symbol),
        tx.category,
        date,
        tx.id
    );
    Ok(())
}

fn list(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (_user, mut txs) = super::user_transactions(store)?;
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &txs)? {
        let rows: Vec<Vec<String>> = txs
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.date.date_naive().to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    t.amount.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Category", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

fn edit(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut patch = TransactionPatch::default();
    if let Some(s) = sub.get_one::<String>("type") {
        patch.kind = Some(s.parse()?);
    }
    if let Some(s) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_amount(s)?);
    }
    if let Some(s) = sub.get_one::<String>("category") {
        patch.category = Some(s.clone());
    }
    if let Some(s) = sub.get_one::<String>("description") {
        patch.description = Some(s.clone());
    }
    if let Some(s) = sub.get_one::<String>("date") {
        patch.date = Some(at_midnight(parse_date(s)?));
    }
    store.update_by_id(id, &patch)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete_by_id(id)?;
    println!("Removed transaction {}", id);
    Ok(())
}
