// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::analytics::saving_tips;
use centavo::models::{TipPriority, Transaction, TxKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx(kind: TxKind, amount: i64, category: &str, date: NaiveDate) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", category, amount, date),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: String::new(),
        date: date.and_hms_opt(9, 0, 0).unwrap().and_utc(),
        user_id: "u1".to_string(),
    }
}

#[test]
fn emergency_fund_tip_is_always_present_once_and_last() {
    let today = d(2025, 6, 15);
    for txs in [
        vec![],
        vec![tx(TxKind::Income, 1000, "salary", d(2025, 6, 1))],
        vec![
            tx(TxKind::Income, 1000, "salary", d(2025, 6, 1)),
            tx(TxKind::Expense, 900, "food", d(2025, 6, 2)),
        ],
    ] {
        let tips = saving_tips(&txs, today);
        let count = tips.iter().filter(|t| t.id == "emergency-fund").count();
        assert_eq!(count, 1);
        assert_eq!(tips.last().unwrap().id, "emergency-fund");
        assert_eq!(tips.last().unwrap().priority, TipPriority::Medium);
    }
}

#[test]
fn food_tip_fires_above_35_percent() {
    let today = d(2025, 6, 15);
    // food is 40% of all expenses; no income so the savings-rate rule skips.
    let txs = vec![
        tx(TxKind::Expense, 400, "food", d(2025, 6, 1)),
        tx(TxKind::Expense, 600, "transport", d(2025, 6, 2)),
    ];
    let tips = saving_tips(&txs, today);
    let ids: Vec<&str> = tips.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["food-spending", "emergency-fund"]);
    let food = &tips[0];
    assert_eq!(food.priority, TipPriority::High);
    assert!(food.actionable);
    // 30% of the 400 food spend
    assert!(food.description.contains("120"));
}

#[test]
fn food_tip_does_not_fire_at_exactly_35_percent() {
    let today = d(2025, 6, 15);
    let txs = vec![
        tx(TxKind::Expense, 35, "food", d(2025, 6, 1)),
        tx(TxKind::Expense, 65, "transport", d(2025, 6, 2)),
    ];
    let tips = saving_tips(&txs, today);
    assert!(tips.iter().all(|t| t.id != "food-spending"));
}

#[test]
fn entertainment_tip_fires_above_20_percent() {
    let today = d(2025, 6, 15);
    let txs = vec![
        tx(TxKind::Expense, 300, "entertainment", d(2025, 6, 1)),
        tx(TxKind::Expense, 700, "utilities", d(2025, 6, 2)),
    ];
    let tips = saving_tips(&txs, today);
    let ent = tips
        .iter()
        .find(|t| t.id == "entertainment-spending")
        .expect("entertainment tip");
    assert_eq!(ent.priority, TipPriority::Medium);
    assert!(ent.description.contains("30"));
}

#[test]
fn savings_rate_tip_absent_at_exactly_20_percent() {
    let today = d(2025, 6, 15);
    // 200/1000 = exactly 20%, which is NOT below the threshold.
    let txs = vec![
        tx(TxKind::Income, 1000, "salary", d(2025, 6, 1)),
        tx(TxKind::Expense, 800, "utilities", d(2025, 6, 2)),
    ];
    let tips = saving_tips(&txs, today);
    assert!(tips.iter().all(|t| t.id != "savings-rate"));
}

#[test]
fn savings_rate_tip_fires_below_20_percent() {
    let today = d(2025, 6, 15);
    let txs = vec![
        tx(TxKind::Income, 1000, "salary", d(2025, 6, 1)),
        tx(TxKind::Expense, 900, "utilities", d(2025, 6, 2)),
    ];
    let tips = saving_tips(&txs, today);
    let rate = tips
        .iter()
        .find(|t| t.id == "savings-rate")
        .expect("savings-rate tip");
    assert_eq!(rate.priority, TipPriority::High);
    assert!(rate.description.contains("10"));
}

#[test]
fn savings_rate_rule_skips_on_zero_income() {
    let today = d(2025, 6, 15);
    let txs = vec![tx(TxKind::Expense, 500, "utilities", d(2025, 6, 2))];
    let tips = saving_tips(&txs, today);
    assert!(tips.iter().all(|t| t.id != "savings-rate"));
}

#[test]
fn rules_are_independent_and_ordered() {
    let today = d(2025, 6, 15);
    // food 50%, entertainment 25%, savings rate 100*(1000-2000)/1000 < 20.
    let txs = vec![
        tx(TxKind::Income, 1000, "salary", d(2025, 6, 1)),
        tx(TxKind::Expense, 1000, "food", d(2025, 6, 2)),
        tx(TxKind::Expense, 500, "entertainment", d(2025, 6, 3)),
        tx(TxKind::Expense, 500, "utilities", d(2025, 6, 4)),
    ];
    let ids: Vec<String> = saving_tips(&txs, today).into_iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec![
            "food-spending",
            "entertainment-spending",
            "savings-rate",
            "emergency-fund"
        ]
    );
}
