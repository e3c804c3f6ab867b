// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::models::User;
use crate::reference;
use crate::store::JsonStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &JsonStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub),
        Some(("show", sub)) => show(store, sub),
        Some(("clear", _)) => {
            store.clear_user()?;
            println!("Profile cleared");
            Ok(())
        }
        _ => Ok(()),
    }
}

fn set(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap();
    let code = sub.get_one::<String>("country").unwrap().to_uppercase();
    let country = reference::country_by_code(&code)
        .with_context(|| format!("Unknown country code '{}', see 'centavo countries'", code))?;

    // Re-running set edits the profile in place; id and creation time stick.
    let existing = store.user()?;
    let (id, created_at) = match &existing {
        Some(u) => (u.id.clone(), u.created_at),
        None => (Utc::now().timestamp_millis().to_string(), Utc::now()),
    };

    let user = User {
        id,
        username: username.clone(),
        country: country.code.clone(),
        currency: country.currency.clone(),
        currency_symbol: country.currency_symbol.clone(),
        created_at,
    };
    store.set_user(&user)?;
    println!(
        "Profile saved for '{}' ({} {})",
        user.username, user.currency, user.currency_symbol
    );
    Ok(())
}

fn show(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = super::require_user(store)?;
    if !maybe_print_json(json_flag, jsonl_flag, &user)? {
        let rows = vec![vec![
            user.username.clone(),
            user.country.clone(),
            format!("{} ({})", user.currency, user.currency_symbol),
            user.created_at.date_naive().to_string(),
        ]];
        println!(
            "{}",
            pretty_table(&["Username", "Country", "Currency", "Since"], rows)
        );
    }
    Ok(())
}
