// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Classifies 5 cards hands into the standard categories and compares them
//! with full tie-breaking. A hand is created with [EvaluatedHand::new] and
//! hands are compared with the standard ordering operators:
//!
//! ```
//! # use showdown_eval::*;
//! let flush = EvaluatedHand::new(&parse_cards("Kd 9d 7d 4d 2d").unwrap()).unwrap();
//! let straight = EvaluatedHand::new(&parse_cards("5h 4c 3s 2d Ah").unwrap()).unwrap();
//! assert_eq!(flush.category(), HandCategory::Flush);
//! assert!(flush > straight);
//! ```
//!
//! Use [best_hand_of] to find the best 5 cards from hole and community cards,
//! and [multi_compare] to find the winners of a showdown:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("Th 9h 8h 7c 2s").unwrap();
//! let h1 = best_hand_of(&parse_cards("AhKs").unwrap(), &board).unwrap();
//! let h2 = best_hand_of(&parse_cards("QhJd").unwrap(), &board).unwrap();
//! assert_eq!(h2.category(), HandCategory::Straight);
//! assert_eq!(multi_compare(&[h1, h2]).unwrap(), vec![false, true]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod compare;
pub use compare::{best_of, multi_compare};

mod error;
pub use error::EvalError;

mod hand;
pub use hand::{EvaluatedHand, HandCategory, HandStrength};

mod select;
pub use select::{best_hand_of, best_hand_of_distinct};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, HoleCards, Rank, Suit, parse_cards};
