// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use centavo::store::{self, JsonStore};
use centavo::{cli, commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = JsonStore::open(store::default_store_path()?);

    match matches.subcommand() {
        Some(("init", _)) => {
            store.init()?;
            println!("Store initialized at {}", store.path().display());
        }
        Some(("profile", sub)) => commands::profile::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("report", sub)) => commands::report::handle(&store, sub)?,
        Some(("tips", sub)) => commands::tips::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("countries", sub)) => commands::countries::handle(sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
