// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all5
// ```

use std::{
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Instant,
};

use showdown_eval::*;

fn main() -> Result<(), EvalError> {
    // Evaluate all 2.6M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;
    const NUM_CATEGORIES: usize = 10;

    // Per task counters.
    let task_counters = (0..NUM_TASKS)
        .map(|_| {
            (0..NUM_CATEGORIES)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // The first evaluation error.
    let error = Mutex::new(None);

    let now = Instant::now();

    Deck::default().par_for_each(NUM_TASKS, 5, |task_id, hand| match EvaluatedHand::new(hand) {
        Ok(hand) => {
            let counters = &task_counters[task_id];
            counters[hand.category() as usize].fetch_add(1, Ordering::Relaxed);
        }
        Err(e) => {
            if let Ok(mut error) = error.lock() {
                error.get_or_insert(e);
            }
        }
    })?;

    if let Some(e) = error.into_inner().ok().flatten() {
        return Err(e);
    }

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..NUM_CATEGORIES)
        .map(|c| {
            task_counters
                .iter()
                .map(|counts| counts[c].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    let categories = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    for category in categories {
        let name = format!("{category}:");
        println!("{name:<17}{}", agg[category as usize]);
    }

    Ok(())
}
