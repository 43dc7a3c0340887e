// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation errors.
use thiserror::Error;

use showdown_cards::{Card, CardError};

/// Errors returned when evaluating or comparing hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have exactly 5 cards.
    #[error("Invalid hand size {0}, a hand must have 5 cards")]
    InvalidHandSize(usize),
    /// The best hand needs 2 hole cards and at least 3 community cards.
    #[error("Invalid number of cards for hand evaluation: {hole} hole cards, {community} community cards")]
    InvalidHandSelection {
        /// The number of hole cards.
        hole: usize,
        /// The number of community cards.
        community: usize,
    },
    /// No hands were given to compare.
    #[error("No hands to compare")]
    NoHandsToCompare,
    /// The same card is used twice.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
    /// Cards error.
    #[error(transparent)]
    Cards(#[from] CardError),
}

/// Checks that no card appears more than once.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }

        seen |= bit;
    }

    Ok(())
}
