// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity calculator configuration.

/// The calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityConfig {
    /// The number of parallel tasks.
    pub num_tasks: usize,
    /// Enumerations with fewer scenarios run on the calling thread.
    pub min_parallel_scenarios: u64,
    /// Reject enumerations with more scenarios than this.
    pub max_scenarios: Option<u64>,
}

impl EquityConfig {
    /// The default minimum number of scenarios for a parallel run.
    pub const MIN_PARALLEL_SCENARIOS: u64 = 10_000;
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            num_tasks: num_cpus::get(),
            min_parallel_scenarios: Self::MIN_PARALLEL_SCENARIOS,
            max_scenarios: None,
        }
    }
}
