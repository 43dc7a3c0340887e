// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("Ah".parse::<Card>().unwrap(), ah);
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! a [HoleCards] type for a player two private cards, and a [Deck] type for
//! removing known cards and iterating the k-cards hands left in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! }).unwrap();
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The [combinations] and [for_each_combination] functions generate the
//! k-subsets of any slice in ascending index order.
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the following example uses 4 tasks to iterate all 5 cards hands,
//! the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! }).unwrap();
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod card;
pub use card::{Card, Rank, Suit, parse_cards};

mod combination;
pub use combination::{Combinations, combinations, for_each_combination, num_combinations};

mod deck;
pub use deck::Deck;

mod error;
pub use error::CardError;

mod hole;
pub use hole::HoleCards;

#[cfg(feature = "parallel")]
mod parallel;
