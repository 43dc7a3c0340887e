// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity calculation report.
use serde::Serialize;
use std::fmt;

use showdown_cards::{Card, HoleCards};
use showdown_eval::EvaluatedHand;

/// A player equity.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerEquity {
    /// The player hole cards.
    pub hole: HoleCards,
    /// The player equity percentage.
    pub equity: f64,
    /// The player best hand with the known community cards, if there are at
    /// least 3 community cards.
    pub hand: Option<EvaluatedHand>,
}

/// The equity of all players for a board.
#[derive(Debug, Clone, Serialize)]
pub struct EquityReport {
    /// The players equities in input order.
    pub players: Vec<PlayerEquity>,
    /// The known community cards.
    pub board: Vec<Card>,
    /// The number of enumerated boards.
    pub scenarios: u64,
}

impl EquityReport {
    /// The players equities percentages in input order.
    pub fn equities(&self) -> Vec<f64> {
        self.players.iter().map(|p| p.equity).collect()
    }
}

impl fmt::Display for EquityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board:")?;
        if self.board.is_empty() {
            write!(f, " -")?;
        }

        for card in &self.board {
            write!(f, " {card}")?;
        }

        writeln!(f, " ({} scenarios)", self.scenarios)?;

        for player in &self.players {
            write!(f, "{}  {:>6.2}%", player.hole, player.equity)?;
            if let Some(hand) = &player.hand {
                write!(f, "  {hand}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
