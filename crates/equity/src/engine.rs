// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact equity enumeration.
use log::{debug, info, warn};
use std::time::Instant;

use showdown_cards::{Card, Deck, HoleCards, num_combinations};
use showdown_eval::{EvalError, EvaluatedHand, best_hand_of, best_hand_of_distinct, best_of};

use crate::{EquityConfig, EquityError, EquityReport, PlayerEquity};

/// Enumerations above this number of scenarios log a warning.
pub const LARGE_ENUMERATION: u64 = 1_000_000;

/// The number of cards on a complete board.
const BOARD_SIZE: usize = 5;

/// Computes exact equities by enumerating all the board completions.
#[derive(Debug, Clone, Default)]
pub struct EquityCalculator {
    config: EquityConfig,
}

impl EquityCalculator {
    /// Creates a calculator with the given configuration.
    pub fn new(config: EquityConfig) -> Self {
        Self { config }
    }

    /// The calculator configuration.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Returns the players equities as percentages in players order.
    pub fn calculate_exact_equity(
        &self,
        players: &[HoleCards],
        community: &[Card],
    ) -> Result<Vec<f64>, EquityError> {
        self.calculate(players, community).map(|r| r.equities())
    }

    /// Enumerates all the boards that complete `community` and returns a
    /// report with each player equity.
    ///
    /// Each scenario gives one point to the winner or splits it evenly between
    /// the tied players, the equity is the player points over the number of
    /// scenarios as a percentage.
    pub fn calculate(
        &self,
        players: &[HoleCards],
        community: &[Card],
    ) -> Result<EquityReport, EquityError> {
        let now = Instant::now();

        if players.len() < 2 {
            return Err(EquityError::InsufficientPlayers(players.len()));
        }

        if community.len() > BOARD_SIZE {
            return Err(EquityError::TooManyCommunityCards(community.len()));
        }

        let deck = remaining_deck(players, community)?;
        let missing = BOARD_SIZE - community.len();
        let scenarios = num_combinations(deck.count(), missing);

        debug!(
            "Enumerating {scenarios} scenarios for {} players with {missing} missing cards",
            players.len()
        );

        if let Some(limit) = self.config.max_scenarios.filter(|&limit| scenarios > limit) {
            return Err(EquityError::TooManyScenarios { scenarios, limit });
        }

        if scenarios > LARGE_ENUMERATION {
            warn!("Large enumeration with {scenarios} scenarios");
        }

        let mut tally = if missing == 0 {
            let mut tally = Tally::new(players.len(), community);
            tally.showdown(players, &[]);
            tally
        } else {
            self.enumerate(&deck, players, community, missing, scenarios)?
        };

        if let Some(e) = tally.error.take() {
            return Err(e.into());
        }

        let equities = tally.equities();
        let report = EquityReport {
            players: players
                .iter()
                .zip(equities)
                .map(|(hole, equity)| PlayerEquity {
                    hole: *hole,
                    equity,
                    hand: best_hand_of(hole.as_slice(), community).ok(),
                })
                .collect(),
            board: community.to_vec(),
            scenarios: tally.scenarios,
        };

        info!(
            "Computed equity for {} players over {} scenarios in {:.3}s",
            players.len(),
            tally.scenarios,
            now.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    #[cfg(feature = "parallel")]
    fn enumerate(
        &self,
        deck: &Deck,
        players: &[HoleCards],
        community: &[Card],
        missing: usize,
        scenarios: u64,
    ) -> Result<Tally, EquityError> {
        use parking_lot::Mutex;

        let num_tasks = self.config.num_tasks.max(1);
        if num_tasks == 1 || scenarios < self.config.min_parallel_scenarios {
            return sequential(deck, players, community, missing);
        }

        debug!("Splitting {scenarios} scenarios in {num_tasks} tasks");

        // One slot per task, each task locks only its own slot.
        let tallies = (0..num_tasks)
            .map(|_| Mutex::new(Tally::new(players.len(), community)))
            .collect::<Vec<_>>();

        deck.par_for_each(num_tasks, missing, |task_id, completion| {
            tallies[task_id].lock().showdown(players, completion);
        })?;

        let mut total = Tally::new(players.len(), community);
        for tally in tallies {
            total.merge(tally.into_inner());
        }

        Ok(total)
    }

    #[cfg(not(feature = "parallel"))]
    fn enumerate(
        &self,
        deck: &Deck,
        players: &[HoleCards],
        community: &[Card],
        missing: usize,
        _scenarios: u64,
    ) -> Result<Tally, EquityError> {
        sequential(deck, players, community, missing)
    }
}

/// Computes the players equities with the default configuration.
pub fn calculate_exact_equity(
    players: &[HoleCards],
    community: &[Card],
) -> Result<Vec<f64>, EquityError> {
    EquityCalculator::default().calculate_exact_equity(players, community)
}

/// Returns a full deck without the players and community cards.
fn remaining_deck(players: &[HoleCards], community: &[Card]) -> Result<Deck, EquityError> {
    let mut deck = Deck::default();

    let known = players.iter().flat_map(|p| p.as_slice()).chain(community);
    for &card in known {
        if !deck.contains(card) {
            return Err(EquityError::DuplicateCard(card));
        }

        deck.remove(card);
    }

    Ok(deck)
}

fn sequential(
    deck: &Deck,
    players: &[HoleCards],
    community: &[Card],
    missing: usize,
) -> Result<Tally, EquityError> {
    let mut tally = Tally::new(players.len(), community);
    deck.for_each(missing, |completion| tally.showdown(players, completion))?;
    Ok(tally)
}

/// Showdown results for a range of scenarios.
#[derive(Debug)]
struct Tally {
    /// Per player wins by number of winners, at index `n - 1` the number of
    /// pots split with `n - 1` other players.
    wins: Vec<Vec<u64>>,
    scenarios: u64,
    /// Known cards followed by the completion.
    board: Vec<Card>,
    known: usize,
    /// A player hole cards followed by the board.
    cards: Vec<Card>,
    /// The players best hands for the current board.
    hands: Vec<EvaluatedHand>,
    error: Option<EvalError>,
}

impl Tally {
    fn new(num_players: usize, community: &[Card]) -> Self {
        let mut board = Vec::with_capacity(BOARD_SIZE);
        board.extend_from_slice(community);

        Self {
            wins: vec![vec![0; num_players]; num_players],
            scenarios: 0,
            board,
            known: community.len(),
            cards: Vec::with_capacity(BOARD_SIZE + 2),
            hands: Vec::with_capacity(num_players),
            error: None,
        }
    }

    /// Plays the showdown for a board completion.
    ///
    /// All the cards have been checked to be different when the deck was
    /// built, so hands are evaluated without duplicate checks.
    fn showdown(&mut self, players: &[HoleCards], completion: &[Card]) {
        if self.error.is_some() {
            return;
        }

        self.board.truncate(self.known);
        self.board.extend_from_slice(completion);

        match self.award(players) {
            Ok(()) => self.scenarios += 1,
            Err(e) => self.error = Some(e),
        }
    }

    fn award(&mut self, players: &[HoleCards]) -> Result<(), EvalError> {
        self.hands.clear();
        for player in players {
            self.cards.clear();
            self.cards.extend_from_slice(player.as_slice());
            self.cards.extend_from_slice(&self.board);
            self.hands.push(best_hand_of_distinct(&self.cards)?);
        }

        let best = *best_of(&self.hands)?;
        let num_winners = self.hands.iter().filter(|h| **h == best).count();
        for (wins, hand) in self.wins.iter_mut().zip(&self.hands) {
            if *hand == best {
                wins[num_winners - 1] += 1;
            }
        }

        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: Tally) {
        for (wins, other) in self.wins.iter_mut().zip(other.wins) {
            for (w, o) in wins.iter_mut().zip(other) {
                *w += o;
            }
        }

        self.scenarios += other.scenarios;
        if self.error.is_none() {
            self.error = other.error;
        }
    }

    fn equities(&self) -> Vec<f64> {
        let scenarios = self.scenarios.max(1) as f64;
        self.wins
            .iter()
            .map(|wins| {
                let points = wins
                    .iter()
                    .enumerate()
                    .map(|(idx, &count)| count as f64 / (idx + 1) as f64)
                    .sum::<f64>();
                points / scenarios * 100.0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;
    use showdown_eval::HandCategory;

    fn players(words: &[&str]) -> Vec<HoleCards> {
        words.iter().map(|w| w.parse().unwrap()).collect()
    }

    fn board(words: &str) -> Vec<Card> {
        parse_cards(words).unwrap()
    }

    fn rounded(equities: &[f64]) -> Vec<f64> {
        equities.iter().map(|e| (e * 100.0).round() / 100.0).collect()
    }

    fn sequential_calculator() -> EquityCalculator {
        EquityCalculator::new(EquityConfig {
            num_tasks: 1,
            ..EquityConfig::default()
        })
    }

    #[test]
    fn flop_overpair() {
        let eq = calculate_exact_equity(&players(&["AhAs", "KhKd"]), &board("2h3c4s")).unwrap();
        assert_eq!(rounded(&eq), vec![91.21, 8.79]);
    }

    #[test]
    fn flop_set_vs_draw() {
        let eq = calculate_exact_equity(&players(&["AhKh", "5s5d"]), &board("Ks5h2h")).unwrap();
        assert_eq!(rounded(&eq), vec![30.71, 69.29]);
    }

    #[test]
    fn complete_board() {
        let report = EquityCalculator::default()
            .calculate(&players(&["AhKs", "QhJd"]), &board("Th9h8h7c2s"))
            .unwrap();
        assert_eq!(report.scenarios, 1);
        assert_eq!(report.equities(), vec![0.0, 100.0]);
    }

    #[test]
    fn royal_flush_on_board() {
        let eq = calculate_exact_equity(&players(&["2c3d", "4c5d"]), &board("AsKsQsJsTs")).unwrap();
        assert_eq!(eq, vec![50.0, 50.0]);
    }

    #[test]
    fn three_players() {
        let eq = calculate_exact_equity(&players(&["AhAs", "KhKd", "QcQd"]), &board("2h3c4s"))
            .unwrap();
        assert_eq!(rounded(&eq), vec![82.95, 8.75, 8.31]);
    }

    #[test]
    fn turn() {
        let report = EquityCalculator::default()
            .calculate(&players(&["AhKh", "2c2d"]), &board("QhJh3c4d"))
            .unwrap();
        assert_eq!(report.scenarios, 44);
        assert_eq!(rounded(&report.equities()), vec![40.91, 59.09]);
    }

    #[test]
    fn equities_sum_to_100() {
        let tests = [
            (vec!["AhAs", "KhKd"], "2h3c4s"),
            (vec!["AhKh", "5s5d", "9c9d"], "Ks5h2h"),
            (vec!["7c2d", "7d2c"], "7h2h3s"),
            (vec!["AhKh", "AsKs", "AdKd", "AcKc"], "QhJs2d"),
        ];

        for (p, b) in tests {
            let eq = calculate_exact_equity(&players(&p), &board(b)).unwrap();
            assert_eq!(eq.len(), p.len());
            let sum = eq.iter().sum::<f64>();
            assert!((sum - 100.0).abs() < 1e-9, "{sum}");
        }
    }

    #[test]
    fn parallel_equals_sequential() {
        let par = EquityCalculator::new(EquityConfig {
            num_tasks: 7,
            min_parallel_scenarios: 0,
            max_scenarios: None,
        });
        let seq = sequential_calculator();

        let tests = [
            (vec!["AhAs", "KhKd"], "2h3c4s"),
            (vec!["AhKh", "5s5d", "9c9d"], "Ks5h2h"),
            (vec!["AhKh", "2c2d"], "QhJh3c4d"),
        ];

        for (p, b) in tests {
            let r1 = par.calculate(&players(&p), &board(b)).unwrap();
            let r2 = seq.calculate(&players(&p), &board(b)).unwrap();
            assert_eq!(r1.scenarios, r2.scenarios);
            assert_eq!(r1.equities(), r2.equities());
        }
    }

    #[test]
    fn report_hands() {
        let report = sequential_calculator()
            .calculate(&players(&["AhAs", "KhKd"]), &board("2h3c4s"))
            .unwrap();
        assert_eq!(report.board, board("2h3c4s"));
        assert_eq!(report.players[0].hole.to_string(), "AhAs");
        assert_eq!(
            report.players[0].hand.map(|h| h.category()),
            Some(HandCategory::OnePair)
        );

        // A complete board is a single scenario.
        let report = EquityCalculator::new(EquityConfig {
            max_scenarios: Some(5),
            ..EquityConfig::default()
        })
        .calculate(&players(&["AhAs", "KhKd"]), &board("2h3c4s5d6d"))
        .unwrap();
        assert_eq!(
            report.players[1].hand.map(|h| h.category()),
            Some(HandCategory::Straight)
        );
        assert_eq!(report.scenarios, 1);
    }

    #[test]
    fn invalid_players() {
        let calc = EquityCalculator::default();
        assert_eq!(
            calc.calculate_exact_equity(&players(&["AhAs"]), &board("2h3c4s")),
            Err(EquityError::InsufficientPlayers(1))
        );
        assert_eq!(
            calc.calculate_exact_equity(&[], &[]),
            Err(EquityError::InsufficientPlayers(0))
        );
    }

    #[test]
    fn too_many_community_cards() {
        assert_eq!(
            calculate_exact_equity(&players(&["AhAs", "KhKd"]), &board("2h3c4s5d6d7c")),
            Err(EquityError::TooManyCommunityCards(6))
        );
    }

    #[test]
    fn duplicate_cards() {
        let ah = "Ah".parse::<Card>().unwrap();
        assert_eq!(
            calculate_exact_equity(&players(&["AhAs", "AhKd"]), &board("2h3c4s")),
            Err(EquityError::DuplicateCard(ah))
        );
        assert_eq!(
            calculate_exact_equity(&players(&["AsKs", "KhKd"]), &board("2hAh4sAh")),
            Err(EquityError::DuplicateCard(ah))
        );
    }

    #[test]
    fn too_many_scenarios() {
        let calc = EquityCalculator::new(EquityConfig {
            max_scenarios: Some(100),
            ..EquityConfig::default()
        });

        assert_eq!(
            calc.calculate_exact_equity(&players(&["AhAs", "KhKd"]), &board("2h3c4s")),
            Err(EquityError::TooManyScenarios {
                scenarios: 990,
                limit: 100
            })
        );

        let eq = calc
            .calculate_exact_equity(&players(&["AhAs", "KhKd"]), &board("2h3c4s5d"))
            .unwrap();
        assert_eq!(eq.len(), 2);
    }

    #[test]
    fn not_enough_cards_left() {
        // 25 players leave 2 cards for a 5 cards board.
        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        let players = deck
            .chunks(2)
            .take(25)
            .map(|c| HoleCards::new(c[0], c[1]).unwrap())
            .collect::<Vec<_>>();

        let res = sequential_calculator().calculate_exact_equity(&players, &[]);
        assert!(matches!(res, Err(EquityError::Cards(_))));
    }

    #[test]
    fn calculator_config() {
        let config = EquityConfig {
            num_tasks: 3,
            min_parallel_scenarios: 50,
            max_scenarios: Some(1_000),
        };

        let calc = EquityCalculator::new(config.clone());
        assert_eq!(calc.config(), &config);
        assert_eq!(EquityCalculator::default().config(), &EquityConfig::default());
    }

    #[test]
    fn tally_consecutive_boards() {
        let players = players(&["AhAs", "KhKd", "Kc9c"]);
        let mut tally = Tally::new(players.len(), &board("2h3c4s"));

        // Aces win.
        tally.showdown(&players, &board("7d8s"));
        // A club flush beats the straight on board.
        tally.showdown(&players, &board("5c6c"));
        // A straight on board, all players split.
        tally.showdown(&players, &board("5d6h"));

        assert!(tally.error.is_none());
        assert_eq!(tally.scenarios, 3);
        assert_eq!(tally.wins[0], vec![1, 0, 1]);
        assert_eq!(tally.wins[1], vec![0, 0, 1]);
        assert_eq!(tally.wins[2], vec![1, 0, 1]);
        assert_eq!(tally.board, board("2h3c4s5d6h"));

        let eq = tally.equities();
        assert!((eq.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    #[ignore]
    fn preflop() {
        // Run with cargo t --release -- --ignored
        let report = EquityCalculator::default()
            .calculate(&players(&["AhAs", "KhKd"]), &[])
            .unwrap();
        assert_eq!(report.scenarios, 1_712_304);
        assert_eq!(rounded(&report.equities()), vec![81.95, 18.05]);
        assert!(report.players.iter().all(|p| p.hand.is_none()));
    }
}
