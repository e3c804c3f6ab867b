// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::Period;
use crate::reference;
use crate::store::JsonStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::{analytics, forecast};

pub fn handle(store: &JsonStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => totals(store, sub),
        Some(("insights", sub)) => insights(store, sub),
        Some(("weekly", sub)) => weekly(store, sub),
        Some(("forecast", sub)) => forecast_cmd(store, sub),
        _ => Ok(()),
    }
}

fn totals(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period: Period = sub.get_one::<String>("period").unwrap().parse()?;
    let (user, txs) = super::user_transactions(store)?;
    let totals = analytics::compute_totals(&txs, period, Utc::now().date_naive());
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let sym = &user.currency_symbol;
        let rows = vec![vec![
            fmt_money(&totals.income, sym),
            fmt_money(&totals.expenses, sym),
            fmt_money(&totals.balance, sym),
        ]];
        println!(
            "{}",
            pretty_table(&["Income", "Expenses", "Balance"], rows)
        );
    }
    Ok(())
}

fn insights(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (user, txs) = super::user_transactions(store)?;
    let insights = analytics::spending_insights(&txs);
    if !maybe_print_json(json_flag, jsonl_flag, &insights)? {
        let rows: Vec<Vec<String>> = insights
            .iter()
            .map(|i| {
                // Unknown category keys fall back to the raw string.
                let name = reference::category(&i.category)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| i.category.clone());
                vec![
                    name,
                    fmt_money(&i.amount, &user.currency_symbol),
                    format!("{}%", i.percentage.round_dp(1)),
                    i.trend.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share", "Trend"], rows)
        );
    }
    Ok(())
}

fn weekly(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (user, txs) = super::user_transactions(store)?;
    let weeks = analytics::weekly_breakdown(&txs, Utc::now().date_naive());
    if !maybe_print_json(json_flag, jsonl_flag, &weeks)? {
        let sym = &user.currency_symbol;
        let rows: Vec<Vec<String>> = weeks
            .iter()
            .map(|w| {
                vec![
                    w.week.clone(),
                    fmt_money(&w.income, sym),
                    fmt_money(&w.expenses, sym),
                    fmt_money(&w.net, sym),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Week", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

fn forecast_cmd(store: &JsonStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (user, txs) = super::user_transactions(store)?;
    let predicted = forecast::predict_monthly_expense(&txs, Utc::now().date_naive());
    if !maybe_print_json(json_flag, jsonl_flag, &serde_json::json!({ "forecast": predicted }))? {
        println!(
            "Projected expenses next month: {}",
            fmt_money(&Decimal::from(predicted), &user.currency_symbol)
        );
    }
    Ok(())
}
