// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
//!
//! A hand is classified once when it is created: the evaluator counts ranks
//! into 13 buckets, builds a rank mask and a suit mask, and stores the result
//! as a [HandStrength] that carries only the ranks needed to break ties. Two
//! hands are then compared with the derived order of their strengths.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

use crate::{EvalError, error::check_distinct};

/// The ranks bits for A-2-3-4-5.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// The category of a hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No combination.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{s}")
    }
}

/// The strength of a hand.
///
/// Variants are declared from the weakest to the strongest and each variant
/// holds the ranks that break ties in comparison order, so the derived [Ord]
/// is the poker hands order. A royal flush is an ace high straight flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandStrength {
    /// All five ranks descending.
    HighCard([Rank; 5]),
    /// The pair rank and the kickers descending.
    OnePair {
        /// The pair rank.
        pair: Rank,
        /// The kickers descending.
        kickers: [Rank; 3],
    },
    /// The pairs ranks and the kicker.
    TwoPair {
        /// The high pair rank.
        high_pair: Rank,
        /// The low pair rank.
        low_pair: Rank,
        /// The kicker.
        kicker: Rank,
    },
    /// The trips rank and the kickers descending.
    ThreeOfAKind {
        /// The trips rank.
        trips: Rank,
        /// The kickers descending.
        kickers: [Rank; 2],
    },
    /// The straight high card, five for the wheel.
    Straight {
        /// The high card.
        high: Rank,
    },
    /// All five ranks descending.
    Flush([Rank; 5]),
    /// The trips and the pair ranks.
    FullHouse {
        /// The trips rank.
        trips: Rank,
        /// The pair rank.
        pair: Rank,
    },
    /// The quads rank and the kicker.
    FourOfAKind {
        /// The quads rank.
        quads: Rank,
        /// The kicker.
        kicker: Rank,
    },
    /// The straight flush high card, five for the wheel.
    StraightFlush {
        /// The high card.
        high: Rank,
    },
}

impl HandStrength {
    /// The hand category for this strength.
    pub fn category(&self) -> HandCategory {
        match self {
            HandStrength::HighCard(_) => HandCategory::HighCard,
            HandStrength::OnePair { .. } => HandCategory::OnePair,
            HandStrength::TwoPair { .. } => HandCategory::TwoPair,
            HandStrength::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            HandStrength::Straight { .. } => HandCategory::Straight,
            HandStrength::Flush(_) => HandCategory::Flush,
            HandStrength::FullHouse { .. } => HandCategory::FullHouse,
            HandStrength::FourOfAKind { .. } => HandCategory::FourOfAKind,
            HandStrength::StraightFlush { high: Rank::Ace } => HandCategory::RoyalFlush,
            HandStrength::StraightFlush { .. } => HandCategory::StraightFlush,
        }
    }
}

/// A classified five cards hand.
///
/// Equality and ordering compare the hands strength only, two hands with the
/// same ranks and different suits are equal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EvaluatedHand {
    strength: HandStrength,
    cards: [Card; 5],
}

impl EvaluatedHand {
    /// Classifies a hand of exactly 5 different cards.
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        let cards = <[Card; 5]>::try_from(cards)
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
        check_distinct(&cards)?;
        Ok(Self::classify(cards))
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.strength.category()
    }

    /// The hand strength used for comparison.
    pub fn strength(&self) -> HandStrength {
        self.strength
    }

    /// The hand cards in display order.
    ///
    /// Straights, flushes and high cards are sorted by rank with the ace last
    /// for a five high straight, other hands are grouped by number of cards
    /// with the same rank, then by rank, then by suit.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Compares the strength of this hand with another hand.
    pub fn compare(&self, other: &EvaluatedHand) -> Ordering {
        self.strength.cmp(&other.strength)
    }

    /// Classifies 5 cards, the caller checks the cards are all different.
    pub(crate) fn classify(mut cards: [Card; 5]) -> Self {
        let mut counts = [0u8; Rank::COUNT];
        let mut ranks = 0u16;
        let mut suits = 0xfu8;

        for card in &cards {
            counts[card.rank_bits() as usize] += 1;
            ranks |= card.rank_mask();
            suits &= card.suit_bits();
        }

        let is_flush = suits != 0;
        let straight = straight_high(ranks);

        // Ranks groups sorted by count and then by rank, strongest first.
        let mut groups = [(0u8, Rank::Deuce); 5];
        let mut len = 0;
        for rank in Rank::ranks().rev() {
            let count = counts[rank as usize];
            if count > 0 {
                groups[len] = (count, rank);
                len += 1;
            }
        }

        groups[..len].sort_by(|a, b| b.0.cmp(&a.0));

        let r = |idx: usize| groups[idx].1;
        let five = || [r(0), r(1), r(2), r(3), r(4)];

        let strength = match (is_flush, straight) {
            (true, Some(high)) => HandStrength::StraightFlush { high },
            _ if groups[0].0 == 4 => HandStrength::FourOfAKind {
                quads: r(0),
                kicker: r(1),
            },
            _ if groups[0].0 == 3 && groups[1].0 == 2 => HandStrength::FullHouse {
                trips: r(0),
                pair: r(1),
            },
            (true, None) => HandStrength::Flush(five()),
            (false, Some(high)) => HandStrength::Straight { high },
            _ if groups[0].0 == 3 => HandStrength::ThreeOfAKind {
                trips: r(0),
                kickers: [r(1), r(2)],
            },
            _ if groups[0].0 == 2 && groups[1].0 == 2 => HandStrength::TwoPair {
                high_pair: r(0),
                low_pair: r(1),
                kicker: r(2),
            },
            _ if groups[0].0 == 2 => HandStrength::OnePair {
                pair: r(0),
                kickers: [r(1), r(2), r(3)],
            },
            _ => HandStrength::HighCard(five()),
        };

        cards.sort_by(|a, b| {
            let (ca, cb) = (counts[a.rank_bits() as usize], counts[b.rank_bits() as usize]);
            cb.cmp(&ca)
                .then_with(|| b.rank().cmp(&a.rank()))
                .then_with(|| a.suit().cmp(&b.suit()))
        });

        // The ace plays low in a wheel.
        if straight == Some(Rank::Five) {
            cards.rotate_left(1);
        }

        Self { strength, cards }
    }
}

/// Returns the high card of a straight given the hand ranks bits.
fn straight_high(ranks: u16) -> Option<Rank> {
    if ranks.count_ones() != 5 {
        return None;
    }

    if ranks == WHEEL {
        return Some(Rank::Five);
    }

    let low = ranks.trailing_zeros() as usize;
    (ranks >> low == 0b11111).then(|| Rank::from_index(low + 4))
}

impl TryFrom<&[Card]> for EvaluatedHand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category())?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}
