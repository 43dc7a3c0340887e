// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi-way hands comparison.
use crate::{EvalError, EvaluatedHand};

/// Returns the strongest hand, the last one if more hands tie.
pub fn best_of(hands: &[EvaluatedHand]) -> Result<&EvaluatedHand, EvalError> {
    hands.iter().max().ok_or(EvalError::NoHandsToCompare)
}

/// Marks the winners among a list of hands.
///
/// Position `i` of the result is true if hand `i` has the highest strength,
/// more than one position is true on a tie.
pub fn multi_compare(hands: &[EvaluatedHand]) -> Result<Vec<bool>, EvalError> {
    let best = best_of(hands)?;
    Ok(hands.iter().map(|h| h == best).collect())
}
