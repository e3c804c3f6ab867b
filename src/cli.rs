// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("centavo")
        .version(crate_version!())
        .about("Single-user personal finance tracking: transactions, insights, saving tips, and a naive expense forecast")
        .subcommand(Command::new("init").about("Create the data store and print its location"))
        .subcommand(
            Command::new("profile")
                .about("Manage the user profile")
                .subcommand(
                    Command::new("set")
                        .about("Create or update the profile")
                        .arg(Arg::new("username").long("username").required(true))
                        .arg(
                            Arg::new("country")
                                .long("country")
                                .default_value("US")
                                .help("Country code from 'centavo countries' (sets currency)"),
                        ),
                )
                .subcommand(Command::new("show").about("Show the profile").args(json_flags()))
                .subcommand(Command::new("clear").about("Remove the profile")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_negative_numbers(true)
                                .help("Non-negative amount in the profile currency"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of a transaction by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("type").long("type"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .allow_negative_numbers(true),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated summaries")
                .subcommand(
                    Command::new("totals")
                        .about("Income, expenses, and balance for a period")
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .default_value("month")
                                .help("week (Mon-start calendar week), month (trailing 30 days), or all"),
                        )
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("insights")
                        .about("Spending share by category")
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("weekly")
                        .about("Income/expense/net for the last 8 weeks")
                        .args(json_flags()),
                )
                .subcommand(
                    Command::new("forecast")
                        .about("3-month moving-average expense forecast")
                        .args(json_flags()),
                ),
        )
        .subcommand(Command::new("tips").about("Rule-based saving tips").args(json_flags()))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("csv")
                        .about("Export transactions as CSV")
                        .arg(Arg::new("out").long("out").help("Output file; stdout if omitted")),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Reference category list")
                .subcommand(Command::new("list").args(json_flags())),
        )
        .subcommand(
            Command::new("countries")
                .about("Supported country/currency codes")
                .args(json_flags()),
        )
        .subcommand(Command::new("doctor").about("Check store health"))
}
