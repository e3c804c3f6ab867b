// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::models::{Transaction, User};
use crate::store::JsonStore;

pub mod profile;
pub mod transactions;
pub mod report;
pub mod tips;
pub mod exporter;
pub mod categories;
pub mod countries;
pub mod doctor;

pub(crate) fn require_user(store: &JsonStore) -> Result<User> {
    store
        .user()?
        .context("No profile configured. Run 'centavo profile set --username <name>' first")
}

/// Active profile plus its transactions. The engine expects pre-filtered
/// per-user lists, so the filter happens here, not in the engine.
pub(crate) fn user_transactions(store: &JsonStore) -> Result<(User, Vec<Transaction>)> {
    let user = require_user(store)?;
    let txs = store
        .transactions()?
        .into_iter()
        .filter(|t| t.user_id == user.id)
        .collect();
    Ok((user, txs))
}
