// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::bail;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => bail!("Invalid transaction type '{}', expected income|expense", s),
        }
    }
}

/// One financial event. Direction is carried by `kind` alone; `amount` is
/// always non-negative, in the profile's home currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub user_id: String,
}

/// Field subset for update-by-id. Unset fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TxKind>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    pub fn apply(&self, tx: &mut Transaction) {
        if let Some(kind) = self.kind {
            tx.kind = kind;
        }
        if let Some(amount) = self.amount {
            tx.amount = amount;
        }
        if let Some(ref category) = self.category {
            tx.category = category.clone();
        }
        if let Some(ref description) = self.description {
            tx.description = description.clone();
        }
        if let Some(date) = self.date {
            tx.date = date;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub country: String,
    pub currency: String,
    pub currency_symbol: String,
    pub created_at: DateTime<Utc>,
}

/// Static reference entity; never created or mutated by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    pub name: String,
    pub currency: String,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Per-category share of total expense spending. Derived, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingInsight {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipPriority {
    High,
    Medium,
    Low,
}

impl fmt::Display for TipPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipPriority::High => write!(f, "high"),
            TipPriority::Medium => write!(f, "medium"),
            TipPriority::Low => write!(f, "low"),
        }
    }
}

/// Rule-triggered recommendation. `id` is a semantic slug: regenerating the
/// tip list replaces instances wholesale, duplicates never accumulate.
#[derive(Debug, Clone, Serialize)]
pub struct SavingTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: TipPriority,
    pub actionable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    pub week: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    All,
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "all" => Ok(Period::All),
            _ => bail!("Invalid period '{}', expected week|month|all", s),
        }
    }
}
