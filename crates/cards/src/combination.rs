// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinations of k items out of n.
//!
//! Subsets are emitted as ascending index selections in lexicographic order,
//! so every subset preserves the relative order of the input items.
use crate::CardError;

/// Returns the binomial coefficient for n choose k.
pub fn num_combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }

    let k = k.min(n - k) as u64;
    let n = n as u64;
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Returns an iterator over all the k-subsets of `items`.
///
/// For k = 0 the iterator yields a single empty subset, fails if k is larger
/// than the number of items.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Result<Combinations<'_, T>, CardError> {
    check_size(items.len(), k)?;

    Ok(Combinations {
        items,
        indices: (0..k).collect(),
        started: false,
        done: false,
    })
}

/// Calls the `f` closure for each k-subset of `items`.
///
/// This is the allocation free version of [combinations], the closure gets a
/// slice that is reused between calls.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut f: F) -> Result<(), CardError>
where
    T: Copy,
    F: FnMut(&[T]),
{
    let n = items.len();
    check_size(n, k)?;

    let mut indices = (0..k).collect::<Vec<_>>();
    let mut subset = items[..k].to_vec();

    loop {
        f(&subset);

        if !advance(&mut indices, n) {
            break;
        }

        for (slot, &idx) in subset.iter_mut().zip(&indices) {
            *slot = items[idx];
        }
    }

    Ok(())
}

/// An iterator over the k-subsets of a slice, see [combinations].
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
        } else if !advance(&mut self.indices, self.items.len()) {
            self.done = true;
            return None;
        }

        Some(self.indices.iter().map(|&idx| self.items[idx].clone()).collect())
    }
}

fn check_size(n: usize, k: usize) -> Result<(), CardError> {
    if k > n {
        Err(CardError::InvalidCombinationSize { k, n })
    } else {
        Ok(())
    }
}

/// Moves `indices` to the next ascending selection out of n, returns false
/// after the last one.
fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();

    // Find the rightmost index that can still move right.
    let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };

    indices[pos] += 1;
    for i in pos + 1..k {
        indices[i] = indices[i - 1] + 1;
    }

    true
}
