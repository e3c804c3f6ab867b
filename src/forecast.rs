// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Forecast estimator: a fixed 3-month simple moving average of expenses.
//!
//! Intentionally naive: no seasonality, no trend, no outlier handling. It
//! averages the three full calendar months before the current one (true
//! month/year matches, not rolling windows — unlike the `month` period in
//! `crate::analytics`).

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Transaction, TxKind};

/// Calendar month `back` months before the one containing `today`, as
/// (year, month).
fn months_back(today: NaiveDate, back: i32) -> (i32, u32) {
    let months0 = today.year() * 12 + today.month0() as i32 - back;
    (months0.div_euclid(12), months0.rem_euclid(12) as u32 + 1)
}

fn month_expenses(txs: &[Transaction], year: i32, month: u32) -> Decimal {
    txs.iter()
        .filter(|t| t.kind == TxKind::Expense)
        .filter(|t| {
            let d = t.date.date_naive();
            d.year() == year && d.month() == month
        })
        .map(|t| t.amount)
        .sum()
}

/// Predicted expense total for the coming month, rounded to the nearest
/// whole unit. Returns 0 when the average cannot be represented as an
/// integer, which with well-formed input only covers the no-data case.
pub fn predict_monthly_expense(txs: &[Transaction], today: NaiveDate) -> i64 {
    let mut sum = Decimal::ZERO;
    for back in 1..=3 {
        let (year, month) = months_back(today, back);
        sum += month_expenses(txs, year, month);
    }
    let average = sum / Decimal::from(3);
    average
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
