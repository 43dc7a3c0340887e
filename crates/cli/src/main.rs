// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, computes the exact equity of two or more players.
//!
//! ```bash
//! $ showdown --player AhAs --player KhKd --board 2h3c4s
//! Board: 2h 3c 4s (990 scenarios)
//! AhAs   91.21%  One Pair: Ah As 4s 3c 2h
//! KhKd    8.79%  One Pair: Kh Kd 4s 3c 2h
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::debug;

use showdown_cards::{HoleCards, parse_cards};
use showdown_equity::{EquityCalculator, EquityConfig};

#[derive(Debug, Parser)]
struct Cli {
    /// A player hole cards, like AhKs.
    #[clap(long = "player", short, required = true)]
    players: Vec<HoleCards>,
    /// The known community cards, like 2h3c4s.
    #[clap(long, short)]
    board: Option<String>,
    /// Number of parallel tasks, defaults to the number of CPUs.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: Option<u16>,
    /// Fail if the number of boards to enumerate exceeds this limit.
    #[clap(long)]
    max_scenarios: Option<u64>,
    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> EquityConfig {
        let mut config = EquityConfig {
            max_scenarios: self.max_scenarios,
            ..EquityConfig::default()
        };

        if let Some(tasks) = self.tasks {
            config.num_tasks = tasks as usize;
        }

        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let board = cli
        .board
        .as_deref()
        .map(parse_cards)
        .transpose()?
        .unwrap_or_default();

    let calculator = EquityCalculator::new(cli.config());
    debug!("Using {:?}", calculator.config());

    let report = calculator.calculate(&cli.players, &board)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
