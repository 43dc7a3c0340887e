// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker exact equity calculator.
//!
//! Computes each player share of the pot by enumerating every possible
//! completion of the community cards and playing the showdown for each one:
//!
//! ```
//! # use showdown_equity::*;
//! # use showdown_cards::{HoleCards, parse_cards};
//! let players = ["AhAs".parse::<HoleCards>().unwrap(), "KhKd".parse().unwrap()];
//! let board = parse_cards("2h 3c 4s").unwrap();
//! let equities = calculate_exact_equity(&players, &board).unwrap();
//! assert_eq!((equities[0] * 100.0).round(), 9121.0);
//! ```
//!
//! With the **`parallel`** feature (on by default) large enumerations are
//! split between [EquityConfig::num_tasks] threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod config;
pub use config::EquityConfig;

mod engine;
pub use engine::{EquityCalculator, LARGE_ENUMERATION, calculate_exact_equity};

mod error;
pub use error::EquityError;

mod report;
pub use report::{EquityReport, PlayerEquity};
