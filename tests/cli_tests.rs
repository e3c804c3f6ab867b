// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::models::{TxKind, User};
use centavo::store::JsonStore;
use centavo::{cli, commands};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn store_with_profile(dir: &std::path::Path) -> JsonStore {
    let store = JsonStore::open(dir.join("centavo.json"));
    store
        .set_user(&User {
            id: "u1".to_string(),
            username: "sam".to_string(),
            country: "US".to_string(),
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        })
        .unwrap();
    store
}

fn dispatch(store: &JsonStore, argv: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("profile", sub)) => commands::profile::handle(store, sub),
        Some(("tx", sub)) => commands::transactions::handle(store, sub),
        Some(("export", sub)) => commands::exporter::handle(store, sub),
        other => panic!("unexpected subcommand {:?}", other),
    }
}

#[test]
fn profile_set_resolves_currency_from_country() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("centavo.json"));
    dispatch(
        &store,
        &["centavo", "profile", "set", "--username", "sam", "--country", "gb"],
    )
    .unwrap();

    let user = store.user().unwrap().expect("profile");
    assert_eq!(user.username, "sam");
    assert_eq!(user.country, "GB");
    assert_eq!(user.currency, "GBP");
    assert_eq!(user.currency_symbol, "£");
}

#[test]
fn profile_set_rejects_unknown_country() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("centavo.json"));
    let res = dispatch(
        &store,
        &["centavo", "profile", "set", "--username", "sam", "--country", "XX"],
    );
    assert!(res.is_err());
}

#[test]
fn tx_add_records_for_the_active_profile() {
    let dir = tempdir().unwrap();
    let store = store_with_profile(dir.path());
    dispatch(
        &store,
        &[
            "centavo", "tx", "add", "--type", "expense", "--amount", "12.50",
            "--category", "food", "--description", "Lunch", "--date", "2025-06-10",
        ],
    )
    .unwrap();

    let txs = store.transactions().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].kind, TxKind::Expense);
    assert_eq!(txs[0].amount, "12.50".parse::<Decimal>().unwrap());
    assert_eq!(txs[0].user_id, "u1");
    assert_eq!(txs[0].date.date_naive().to_string(), "2025-06-10");
}

#[test]
fn tx_add_rejects_negative_amounts() {
    let dir = tempdir().unwrap();
    let store = store_with_profile(dir.path());
    let res = dispatch(
        &store,
        &[
            "centavo", "tx", "add", "--type", "expense", "--amount=-5",
            "--category", "food", "--date", "2025-06-10",
        ],
    );
    assert!(res.is_err());
    assert!(store.transactions().unwrap().is_empty());
}

#[test]
fn tx_add_requires_a_profile() {
    let dir = tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("centavo.json"));
    let res = dispatch(
        &store,
        &[
            "centavo", "tx", "add", "--type", "income", "--amount", "10",
            "--category", "salary",
        ],
    );
    assert!(res.is_err());
}

#[test]
fn tx_edit_and_rm_round_trip_through_the_store() {
    let dir = tempdir().unwrap();
    let store = store_with_profile(dir.path());
    dispatch(
        &store,
        &[
            "centavo", "tx", "add", "--type", "expense", "--amount", "10",
            "--category", "food", "--date", "2025-06-10",
        ],
    )
    .unwrap();
    let id = store.transactions().unwrap()[0].id.clone();

    dispatch(
        &store,
        &["centavo", "tx", "edit", "--id", &id, "--amount", "25", "--category", "transport"],
    )
    .unwrap();
    let txs = store.transactions().unwrap();
    assert_eq!(txs[0].amount, Decimal::from(25));
    assert_eq!(txs[0].category, "transport");

    dispatch(&store, &["centavo", "tx", "rm", "--id", &id]).unwrap();
    assert!(store.transactions().unwrap().is_empty());
}

#[test]
fn export_csv_writes_header_and_rows_to_file() {
    let dir = tempdir().unwrap();
    let store = store_with_profile(dir.path());
    dispatch(
        &store,
        &[
            "centavo", "tx", "add", "--type", "expense", "--amount", "12.50",
            "--category", "food", "--description", "Lunch", "--date", "2025-06-10",
        ],
    )
    .unwrap();

    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();
    dispatch(&store, &["centavo", "export", "csv", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "Date,Type,Category,Description,Amount");
    assert_eq!(lines.next().unwrap(), "2025-06-10,expense,food,Lunch,12.50");
    assert!(lines.next().is_none());
}
