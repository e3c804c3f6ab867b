// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! JSON key-value transaction store.
//!
//! One document on disk holding the profile and the transaction list,
//! rewritten whole on every mutation (last-writer-wins, single-user
//! assumption). The store is always passed in explicitly; nothing in the
//! crate reaches for it ambiently.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Transaction, TransactionPatch, User};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Centavo", "centavo"));

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine platform-specific data dir")]
    NoDataDir,
    #[error("failed to read store file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write store file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is not valid JSON")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record")]
    Encode(#[source] serde_json::Error),
    #[error("no transaction with id '{0}'")]
    UnknownTransaction(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub fn default_store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(StoreError::NoDataDir)?;
    Ok(proj.data_dir().join("centavo.json"))
}

/// Transaction records stay raw JSON until decoded so that one malformed
/// record cannot make the rest of the store unreadable.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    transactions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreReport {
    pub path: PathBuf,
    pub total_records: usize,
    pub readable: usize,
    pub skipped: usize,
    pub has_profile: bool,
}

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store file if it does not exist yet.
    pub fn init(&self) -> Result<()> {
        if !self.path.exists() {
            self.save(&Document::default())?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let raw = serde_json::to_string_pretty(doc).map_err(StoreError::Encode)?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "wrote {} record(s) to {}",
            doc.transactions.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read all transactions. Records that fail to decode (e.g. malformed
    /// dates) are skipped with a warning, not fatal.
    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        let doc = self.load()?;
        let mut txs = Vec::with_capacity(doc.transactions.len());
        for value in doc.transactions {
            match serde_json::from_value::<Transaction>(value) {
                Ok(tx) => txs.push(tx),
                Err(e) => log::warn!("skipping malformed transaction record: {}", e),
            }
        }
        Ok(txs)
    }

    /// Replace the whole transaction list.
    pub fn set_transactions(&self, txs: &[Transaction]) -> Result<()> {
        let mut doc = self.load()?;
        doc.transactions = txs
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<_, _>>()
            .map_err(StoreError::Encode)?;
        self.save(&doc)
    }

    pub fn append(&self, tx: &Transaction) -> Result<()> {
        let mut doc = self.load()?;
        doc.transactions
            .push(serde_json::to_value(tx).map_err(StoreError::Encode)?);
        self.save(&doc)
    }

    /// Patch the first record with a matching id. Id uniqueness is assumed;
    /// the first match is authoritative.
    pub fn update_by_id(&self, id: &str, patch: &TransactionPatch) -> Result<()> {
        let mut doc = self.load()?;
        for value in doc.transactions.iter_mut() {
            if value.get("id").and_then(serde_json::Value::as_str) != Some(id) {
                continue;
            }
            let mut tx: Transaction = match serde_json::from_value(value.clone()) {
                Ok(tx) => tx,
                Err(e) => {
                    log::warn!("cannot patch malformed record '{}': {}", id, e);
                    break;
                }
            };
            patch.apply(&mut tx);
            *value = serde_json::to_value(&tx).map_err(StoreError::Encode)?;
            return self.save(&doc);
        }
        Err(StoreError::UnknownTransaction(id.to_string()))
    }

    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut doc = self.load()?;
        let before = doc.transactions.len();
        doc.transactions
            .retain(|v| v.get("id").and_then(serde_json::Value::as_str) != Some(id));
        if doc.transactions.len() == before {
            return Err(StoreError::UnknownTransaction(id.to_string()));
        }
        self.save(&doc)
    }

    pub fn user(&self) -> Result<Option<User>> {
        Ok(self.load()?.user)
    }

    pub fn set_user(&self, user: &User) -> Result<()> {
        let mut doc = self.load()?;
        doc.user = Some(user.clone());
        self.save(&doc)
    }

    pub fn clear_user(&self) -> Result<()> {
        let mut doc = self.load()?;
        doc.user = None;
        self.save(&doc)
    }

    /// Health summary for `doctor`: how much of the store is readable.
    pub fn verify(&self) -> Result<StoreReport> {
        let doc = self.load()?;
        let total = doc.transactions.len();
        let readable = doc
            .transactions
            .iter()
            .filter(|v| serde_json::from_value::<Transaction>((*v).clone()).is_ok())
            .count();
        Ok(StoreReport {
            path: self.path.clone(),
            total_records: total,
            readable,
            skipped: total - readable,
            has_profile: doc.user.is_some(),
        })
    }
}
