// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when parsing or grouping cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card word is not a rank letter followed by a suit letter.
    #[error("Invalid card word: {0}")]
    InvalidCardWord(String),
    /// The rank letter is not one of `23456789TJQKA`.
    #[error("Invalid rank letter: {0}")]
    InvalidRankLetter(char),
    /// The suit letter is not one of `hdcs`.
    #[error("Invalid suit letter: {0}")]
    InvalidSuitLetter(char),
    /// A hole cards word is not two card words.
    #[error("Invalid hole cards word: {0}")]
    InvalidHoleCardsWord(String),
    /// The two hole cards are the same card.
    #[error("Hole cards cannot be identical: {0}")]
    IdenticalHoleCards(Card),
    /// A combination size larger than the number of items.
    #[error("Invalid combination size {k} for {n} items")]
    InvalidCombinationSize {
        /// The requested subset size.
        k: usize,
        /// The number of items.
        n: usize,
    },
}
