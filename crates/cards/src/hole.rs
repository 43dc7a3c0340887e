// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hole cards.
use serde::Serialize;
use std::{fmt, str::FromStr};

use crate::{Card, CardError};

/// The two private cards dealt to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    /// Creates hole cards from two different cards.
    pub fn new(c1: Card, c2: Card) -> Result<Self, CardError> {
        if c1 == c2 {
            return Err(CardError::IdenticalHoleCards(c1));
        }

        Ok(Self([c1, c2]))
    }

    /// Parses hole cards from two concatenated card words like `"AhKs"`.
    pub fn from_words(words: &str) -> Result<Self, CardError> {
        let letters = words.chars().collect::<Vec<_>>();
        if letters.len() != 4 {
            return Err(CardError::InvalidHoleCardsWord(words.to_string()));
        }

        let c1 = letters[..2].iter().collect::<String>().parse()?;
        let c2 = letters[2..].iter().collect::<String>().parse()?;
        Self::new(c1, c2)
    }

    /// The two cards.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// The two cards as a slice.
    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }
}

impl FromStr for HoleCards {
    type Err = CardError;

    fn from_str(words: &str) -> Result<Self, Self::Err> {
        Self::from_words(words)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn hole_cards_new() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ks = Card::new(Rank::King, Suit::Spades);
        let hole = HoleCards::new(ah, ks).unwrap();
        assert_eq!(hole.cards(), [ah, ks]);

        // Same rank or same suit is fine.
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        assert!(HoleCards::new(ah, as_).is_ok());
        assert!(HoleCards::new(ks, as_).is_ok());

        assert_eq!(
            HoleCards::new(ah, ah),
            Err(CardError::IdenticalHoleCards(ah))
        );
    }

    #[test]
    fn hole_cards_from_words() {
        let hole = HoleCards::from_words("AhKs").unwrap();
        assert_eq!(hole.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hole.cards()[1], Card::new(Rank::King, Suit::Spades));
        assert_eq!(hole.to_string(), "AhKs");

        let hole = "2c3d".parse::<HoleCards>().unwrap();
        assert_eq!(hole.cards()[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(hole.cards()[1], Card::new(Rank::Trey, Suit::Diamonds));

        for word in ["AhKs", "AsKc", "AcKd", "AdKh", "TsJh", "AsAh"] {
            assert!(HoleCards::from_words(word).is_ok(), "{word}");
        }
    }

    #[test]
    fn hole_cards_invalid_words() {
        for word in ["", "Ah", "AhK", "AhKsQ"] {
            assert_eq!(
                HoleCards::from_words(word),
                Err(CardError::InvalidHoleCardsWord(word.to_string()))
            );
        }

        assert_eq!(
            HoleCards::from_words("AhAh"),
            Err(CardError::IdenticalHoleCards(Card::new(Rank::Ace, Suit::Hearts)))
        );
        assert_eq!(HoleCards::from_words("XhKs"), Err(CardError::InvalidRankLetter('X')));
        assert_eq!(HoleCards::from_words("AhXs"), Err(CardError::InvalidRankLetter('X')));
        assert_eq!(HoleCards::from_words("AyKs"), Err(CardError::InvalidSuitLetter('y')));
        assert_eq!(HoleCards::from_words("AhKz"), Err(CardError::InvalidSuitLetter('z')));
    }
}
