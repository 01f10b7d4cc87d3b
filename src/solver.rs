//! Time-budgeted search driver.
//!
//! Orchestrates the full pipeline: build the distance matrix and neighbor
//! index once, construct a greedy tour, then run 2-opt fixed points in a
//! loop until convergence or until the wall-clock budget runs out,
//! keeping the best tour seen.

use std::time::{Duration, Instant};

use crate::heuristics::construction::{ConstructionHeuristic, GreedyNearestNeighbor};
use crate::heuristics::local_search::{LocalSearch, TwoOptSearch};
use crate::instance::TspInstance;
use crate::neighbors::{NeighborIndex, DEFAULT_NEIGHBOR_LIST_SIZE};
use crate::solution::Solution;

/// Default wall-clock budget in seconds. Intentionally just under a common
/// 2-second external judge limit; tune it to the deadline you actually have.
pub const DEFAULT_TIME_BUDGET_SECS: f64 = 1.9;

/// Tunable parameters for the search driver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Neighbor candidate list size (k)
    pub neighbor_list_size: usize,
    /// Wall-clock budget for the whole search
    pub time_budget: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            neighbor_list_size: DEFAULT_NEIGHBOR_LIST_SIZE,
            time_budget: Duration::from_secs_f64(DEFAULT_TIME_BUDGET_SECS),
        }
    }
}

/// Runs construction plus repeated local-search passes under a time budget
pub struct SearchDriver {
    pub config: SolverConfig,
}

impl SearchDriver {
    pub fn new(config: SolverConfig) -> Self {
        SearchDriver { config }
    }

    /// Solve the instance, returning the best tour found.
    ///
    /// The clock is captured once at entry (monotonic) and checked between
    /// whole local-search fixed points, never mid-sweep, so a single slow
    /// pass can overrun the nominal budget. Whatever happens, the result
    /// is a valid permutation: at minimum the greedy construction.
    pub fn solve(&self, instance: &TspInstance) -> Solution {
        let start = Instant::now();
        let n = instance.dimension;

        if n <= 1 {
            let tour = if n == 1 { vec![0] } else { Vec::new() };
            let mut solution = Solution::from_tour(instance, tour, "SearchDriver");
            solution.computation_time = start.elapsed().as_secs_f64();
            return solution;
        }

        let neighbors = NeighborIndex::build(instance, self.config.neighbor_list_size);
        let search = TwoOptSearch::new(&neighbors);

        let mut best = GreedyNearestNeighbor::new().construct(instance);
        log::debug!(
            "greedy construction: length {} in {:.4}s",
            best.length,
            best.computation_time
        );

        let mut passes = 0usize;
        while start.elapsed() < self.config.time_budget {
            let mut candidate = best.clone();
            search.improve(instance, &mut candidate);
            passes += 1;

            if candidate.length < best.length {
                log::debug!(
                    "pass {}: length {} -> {}",
                    passes,
                    best.length,
                    candidate.length
                );
                best = candidate;
            } else {
                // Converged: a full fixed point produced no shorter tour
                break;
            }
        }

        best.algorithm = "SearchDriver".to_string();
        best.iterations = Some(passes);
        best.computation_time = start.elapsed().as_secs_f64();
        log::info!(
            "instance {}: n={}, length {}, {} passes, {:.4}s",
            instance.name,
            n,
            best.length,
            passes,
            best.computation_time
        );
        best
    }
}

impl Default for SearchDriver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
