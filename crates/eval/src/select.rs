// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use showdown_cards::{Card, for_each_combination};

use crate::{EvalError, EvaluatedHand, error::check_distinct};

/// Returns the strongest 5 cards hand from 2 hole cards and 3 to 5 community
/// cards.
///
/// All 5-subsets of the combined cards are evaluated, when more than one
/// subset has the best strength any of them is returned as they compare equal.
pub fn best_hand_of(hole: &[Card], community: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let invalid = || EvalError::InvalidHandSelection {
        hole: hole.len(),
        community: community.len(),
    };

    if hole.len() != 2 || community.len() < 3 {
        return Err(invalid());
    }

    let cards = [hole, community].concat();
    check_distinct(&cards)?;

    let mut best: Option<EvaluatedHand> = None;
    for_each_combination(&cards, 5, |subset| {
        let hand = EvaluatedHand::classify([subset[0], subset[1], subset[2], subset[3], subset[4]]);
        if best.as_ref().is_none_or(|b| hand > *b) {
            best = Some(hand);
        }
    })?;

    best.ok_or_else(invalid)
}

/// Returns the strongest 5 cards hand out of 5 to 7 cards.
///
/// The cards must all be different, this function doesn't check for
/// duplicates and doesn't allocate. Fails with [EvalError::InvalidHandSize]
/// when given fewer than 5 or more than 7 cards.
pub fn best_hand_of_distinct(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(EvalError::InvalidHandSize(n));
    }

    let mut best: Option<EvaluatedHand> = None;
    for mask in 0u8..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }

        let mut subset = [cards[0]; 5];
        let selected = cards
            .iter()
            .enumerate()
            .filter(|&(idx, _)| mask & (1 << idx) != 0);
        for (slot, (_, card)) in subset.iter_mut().zip(selected) {
            *slot = *card;
        }

        let hand = EvaluatedHand::classify(subset);
        if best.as_ref().is_none_or(|b| hand > *b) {
            best = Some(hand);
        }
    }

    best.ok_or(EvalError::InvalidHandSize(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandCategory;
    use showdown_cards::parse_cards;

    fn best(hole: &str, community: &str) -> EvaluatedHand {
        best_hand_of(&parse_cards(hole).unwrap(), &parse_cards(community).unwrap()).unwrap()
    }

    #[test]
    fn best_full_house() {
        let hand = best("AsAd", "AcJsTs9hJc");
        assert_eq!(hand.category(), HandCategory::FullHouse);
        assert_eq!(hand.cards().to_vec(), parse_cards("AdAcAsJcJs").unwrap());
        assert_eq!(hand.to_string(), "Full House: Ad Ac As Jc Js");
    }

    #[test]
    fn best_uses_board_only() {
        let hand = best("2c3d", "AhKhQhJhTh");
        assert_eq!(hand.category(), HandCategory::RoyalFlush);
    }

    #[test]
    fn best_with_three_community_cards() {
        let hand = best("AhAs", "2h3c4s");
        assert_eq!(hand.category(), HandCategory::OnePair);
        assert_eq!(hand.cards().to_vec(), parse_cards("AhAs4s3c2h").unwrap());
    }

    #[test]
    fn best_wheel() {
        let hand = best("Ah9c", "2d3s4h5cKd");
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.cards().to_vec(), parse_cards("5c4h3s2dAh").unwrap());
    }

    #[test]
    fn best_matches_all_subsets() {
        let hole = parse_cards("Kh7d").unwrap();
        let community = parse_cards("Kd7c7s2hQh").unwrap();
        let hand = best_hand_of(&hole, &community).unwrap();

        let all = [hole, community].concat();
        for_each_combination(&all, 5, |h| {
            assert!(EvaluatedHand::new(h).unwrap() <= hand);
        })
        .unwrap();
        assert_eq!(hand.category(), HandCategory::FullHouse);
    }

    #[test]
    fn best_is_order_independent() {
        let sets = ["AsAdAcJsJcTs9h", "Ah9c2d3s4h5cKd", "2c3dAhKhQhJhTh", "Kh7dKd7c7s2hQh"];

        for words in sets {
            let cards = parse_cards(words).unwrap();
            let expected = best_hand_of(&cards[..2], &cards[2..]).unwrap().strength();

            let mut orders = Vec::new();
            for shift in 0..cards.len() {
                let mut rotated = cards.clone();
                rotated.rotate_left(shift);
                orders.push(rotated.clone());
                rotated.reverse();
                orders.push(rotated);
            }

            for order in &orders {
                // Different cards end up as hole cards for each order.
                let hand = best_hand_of(&order[..2], &order[2..]).unwrap();
                assert_eq!(hand.strength(), expected, "{words}");

                // Fewer community cards, the best hand can only be weaker.
                let hand = best_hand_of(&order[..2], &order[2..5]).unwrap();
                assert!(hand.strength() <= expected, "{words}");

                assert_eq!(best_hand_of_distinct(order).unwrap().strength(), expected);
            }
        }
    }

    #[test]
    fn best_distinct_matches_best_hand_of() {
        // All 7 cards sets from 10 cards, split in hole and community cards.
        let cards = parse_cards("AhKhQhJhTh9c5c4d3s2s").unwrap();
        for_each_combination(&cards, 7, |set| {
            let expected = best_hand_of(&set[..2], &set[2..]).unwrap();
            let hand = best_hand_of_distinct(set).unwrap();
            assert_eq!(hand.strength(), expected.strength());

            let hand = best_hand_of_distinct(&set[..6]).unwrap();
            let expected = best_hand_of(&set[..2], &set[2..6]).unwrap();
            assert_eq!(hand.strength(), expected.strength());
        })
        .unwrap();
    }

    #[test]
    fn best_distinct_invalid_size() {
        let cards = parse_cards("AhKhQhJhTh9h8h7h").unwrap();
        assert_eq!(
            best_hand_of_distinct(&cards[..4]),
            Err(EvalError::InvalidHandSize(4))
        );
        assert_eq!(best_hand_of_distinct(&cards), Err(EvalError::InvalidHandSize(8)));
        assert!(best_hand_of_distinct(&cards[..5]).is_ok());
    }

    #[test]
    fn invalid_selection() {
        let cards = parse_cards("AhKhQhJhTh9h8h").unwrap();

        assert_eq!(
            best_hand_of(&cards[..1], &cards[1..5]),
            Err(EvalError::InvalidHandSelection { hole: 1, community: 4 })
        );
        assert_eq!(
            best_hand_of(&cards[..2], &cards[2..4]),
            Err(EvalError::InvalidHandSelection { hole: 2, community: 2 })
        );
        assert_eq!(
            best_hand_of(&cards[..3], &cards[3..]),
            Err(EvalError::InvalidHandSelection { hole: 3, community: 4 })
        );
    }

    #[test]
    fn duplicate_cards() {
        let hole = parse_cards("AhKh").unwrap();
        let community = parse_cards("2c3cAh").unwrap();
        assert_eq!(
            best_hand_of(&hole, &community),
            Err(EvalError::DuplicateCard(hole[0]))
        );
    }
}
