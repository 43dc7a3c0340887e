// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity calculation errors.
use thiserror::Error;

use showdown_cards::{Card, CardError};
use showdown_eval::EvalError;

/// Errors returned by the equity calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// Less than 2 players.
    #[error("At least 2 players are required, got {0}")]
    InsufficientPlayers(usize),
    /// More than 5 community cards.
    #[error("Too many community cards {0}, at most 5 are allowed")]
    TooManyCommunityCards(usize),
    /// A card is used more than once by players or board.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
    /// The enumeration is larger than the configured limit.
    #[error("Too many scenarios {scenarios}, the limit is {limit}")]
    TooManyScenarios {
        /// The number of scenarios to enumerate.
        scenarios: u64,
        /// The configured limit.
        limit: u64,
    },
    /// Hand evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// Cards error.
    #[error(transparent)]
    Cards(#[from] CardError),
}
