// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::JsonStore;

pub fn handle(store: &JsonStore) -> Result<()> {
    let report = store.verify()?;
    println!("Store file: {}", report.path.display());
    println!(
        "Profile: {}",
        if report.has_profile { "present" } else { "missing" }
    );
    println!(
        "Transactions: {} readable of {} stored",
        report.readable, report.total_records
    );
    if report.skipped > 0 {
        println!(
            "WARNING: {} malformed record(s) will be skipped by reads",
            report.skipped
        );
    } else {
        println!("OK: store is healthy");
    }
    Ok(())
}
