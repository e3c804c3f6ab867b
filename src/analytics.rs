// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation engine: pure functions over an in-memory transaction list.
//!
//! Callers pre-filter the list to a single user and pass "today" explicitly;
//! nothing here reads storage or the clock. Every call recomputes from
//! scratch, there is no caching layer.
//!
//! Weeks start on Monday, a fixed convention independent of host locale. The
//! `month` period is a trailing 30-day window ending today, NOT the calendar
//! month; the forecast in `crate::forecast` uses true calendar months. Both
//! behaviors are deliberate contracts, do not unify them.

use anyhow::Result;
use chrono::{Duration, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

use crate::models::{
    Period, SavingTip, SpendingInsight, TipPriority, Totals, Transaction, Trend, TxKind,
    WeekSummary,
};

/// Monday-start bounds of the calendar week containing `anchor`.
fn week_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = anchor.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}

fn in_window(tx: &Transaction, start: NaiveDate, end: NaiveDate) -> bool {
    let d = tx.date.date_naive();
    start <= d && d <= end
}

fn sum_by_kind<'a, I>(txs: I) -> (Decimal, Decimal)
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in txs {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expenses += t.amount,
        }
    }
    (income, expenses)
}

/// Income, expense, and balance sums over the given period. An empty
/// retained set yields all-zero totals.
pub fn compute_totals(txs: &[Transaction], period: Period, today: NaiveDate) -> Totals {
    let (income, expenses) = match period {
        Period::Week => {
            let (start, end) = week_bounds(today);
            sum_by_kind(txs.iter().filter(|t| in_window(t, start, end)))
        }
        Period::Month => {
            let start = today - Duration::days(30);
            sum_by_kind(txs.iter().filter(|t| in_window(t, start, today)))
        }
        Period::All => sum_by_kind(txs.iter()),
    };
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Per-category expense shares over the whole supplied list (no time
/// filtering), sorted descending by amount. Category keys pass through raw,
/// whether or not the reference list knows them. The trend tag is a
/// placeholder: always `Stable`, not derived from history.
pub fn spending_insights(txs: &[Transaction]) -> Vec<SpendingInsight> {
    let mut by_category: HashMap<String, Decimal> = HashMap::new();
    let mut total = Decimal::ZERO;
    for t in txs.iter().filter(|t| t.kind == TxKind::Expense) {
        *by_category.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
        total += t.amount;
    }

    let mut insights: Vec<SpendingInsight> = by_category
        .into_iter()
        .map(|(category, amount)| {
            // Zero total would divide by zero; report 0% instead.
            let percentage = if total.is_zero() {
                Decimal::ZERO
            } else {
                amount / total * Decimal::ONE_HUNDRED
            };
            SpendingInsight {
                category,
                amount,
                percentage,
                trend: Trend::Stable,
            }
        })
        .collect();
    insights.sort_by(|a, b| b.amount.cmp(&a.amount));
    insights
}

fn round_whole(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed-threshold saving tips. Rules are independent; every applicable tip
/// is emitted, in rule order, with the emergency-fund tip always last.
pub fn saving_tips(txs: &[Transaction], today: NaiveDate) -> Vec<SavingTip> {
    let insights = spending_insights(txs);
    let totals = compute_totals(txs, Period::Month, today);
    let mut tips = Vec::new();

    if let Some(food) = insights.iter().find(|i| i.category == "food") {
        if food.percentage > Decimal::from(35) {
            let saving = round_whole(food.amount * Decimal::new(3, 1));
            tips.push(SavingTip {
                id: "food-spending".to_string(),
                title: "Optimize Food Expenses".to_string(),
                description: format!(
                    "You're spending {}% on food. Consider cooking at home to save up to {} monthly.",
                    food.percentage.round_dp(1),
                    saving
                ),
                category: "food".to_string(),
                priority: TipPriority::High,
                actionable: true,
            });
        }
    }

    if let Some(ent) = insights.iter().find(|i| i.category == "entertainment") {
        if ent.percentage > Decimal::from(20) {
            tips.push(SavingTip {
                id: "entertainment-spending".to_string(),
                title: "Review Entertainment Subscriptions".to_string(),
                description: format!(
                    "Entertainment accounts for {}% of your spending. Cancel unused subscriptions to save money.",
                    ent.percentage.round_dp(1)
                ),
                category: "entertainment".to_string(),
                priority: TipPriority::Medium,
                actionable: true,
            });
        }
    }

    // Zero income makes the rate meaningless; skip the rule rather than
    // advise on a non-finite number.
    if !totals.income.is_zero() {
        let rate = totals.balance / totals.income * Decimal::ONE_HUNDRED;
        if rate < Decimal::from(20) {
            tips.push(SavingTip {
                id: "savings-rate".to_string(),
                title: "Improve Savings Rate".to_string(),
                description: format!(
                    "Your current savings rate is {}%. Try to save at least 20% of your income.",
                    rate.round_dp(1)
                ),
                category: "general".to_string(),
                priority: TipPriority::High,
                actionable: true,
            });
        }
    }

    tips.push(SavingTip {
        id: "emergency-fund".to_string(),
        title: "Build Emergency Fund".to_string(),
        description: "Aim to have 3-6 months of expenses saved for emergencies.".to_string(),
        category: "general".to_string(),
        priority: TipPriority::Medium,
        actionable: true,
    });

    tips
}

/// Render the list as CSV, header `Date,Type,Category,Description,Amount`.
/// Embedded delimiters in free text are RFC-4180 quoted; dates are
/// `YYYY-MM-DD` regardless of host locale.
pub fn export_csv(txs: &[Transaction]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["Date", "Type", "Category", "Description", "Amount"])?;
    for t in txs {
        wtr.write_record([
            t.date.date_naive().to_string(),
            t.kind.to_string(),
            t.category.clone(),
            t.description.clone(),
            t.amount.to_string(),
        ])?;
    }
    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Income/expense/net sums for the 8 most recent calendar weeks, oldest
/// first. The current week is labelled "Week Current", earlier ones
/// "Week N" where N is weeks ago.
pub fn weekly_breakdown(txs: &[Transaction], today: NaiveDate) -> Vec<WeekSummary> {
    let mut weeks = Vec::with_capacity(8);
    for i in (0..8i64).rev() {
        let (start, end) = week_bounds(today - Duration::weeks(i));
        let (income, expenses) = sum_by_kind(txs.iter().filter(|t| in_window(t, start, end)));
        let week = if i == 0 {
            "Week Current".to_string()
        } else {
            format!("Week {}", i)
        };
        weeks.push(WeekSummary {
            week,
            income,
            expenses,
            net: income - expenses,
        });
    }
    weeks
}
