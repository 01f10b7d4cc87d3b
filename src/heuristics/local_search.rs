//! Local search improvement heuristics.
//!
//! The only operator here is 2-opt restricted to precomputed neighbor
//! candidate lists: remove two edges, reconnect the tour the other way,
//! keep the change if it is strictly shorter.

use crate::instance::TspInstance;
use crate::neighbors::NeighborIndex;
use crate::solution::Solution;

/// Trait for local search improvement methods
pub trait LocalSearch {
    /// Improve the solution in place; returns true if anything changed
    fn improve(&self, instance: &TspInstance, solution: &mut Solution) -> bool;
    fn name(&self) -> &str;
}

/// Neighbor-list 2-Opt Local Search
///
/// A 2-opt move removes edges (u,v) and (w,z), where v and z follow u and
/// w in tour order, and replaces them with (u,w) and (v,z), reversing the
/// segment in between. Moves are accepted only on strict improvement, so
/// tour length decreases monotonically and the search always terminates.
///
/// Candidate partners `w` for a node are drawn from its neighbor list
/// only, and the first improving move found is applied immediately
/// (first-improvement), after which the candidate scan restarts for the
/// current position so it never evaluates stale state.
pub struct TwoOptSearch<'a> {
    neighbors: &'a NeighborIndex,
}

impl<'a> TwoOptSearch<'a> {
    pub fn new(neighbors: &'a NeighborIndex) -> Self {
        TwoOptSearch { neighbors }
    }

    /// Run one sweep over every tour position; returns the number of
    /// moves applied. A sweep that applies zero moves means the tour is
    /// locally optimal with respect to its candidate lists.
    ///
    /// `position` is the node -> tour-position index; it is kept in sync
    /// with every segment reversal so candidate lookups are O(1).
    fn sweep(
        &self,
        instance: &TspInstance,
        solution: &mut Solution,
        position: &mut [usize],
    ) -> usize {
        let n = solution.tour.len();
        let mut moves = 0;

        for i in 0..n - 1 {
            'rescan: loop {
                let u = solution.tour[i];
                let v = solution.tour[i + 1];

                for &w in self.neighbors.candidates(u) {
                    // Skip the terminal self-entry and u's own successor
                    if w == u || w == v {
                        continue;
                    }

                    let j = position[w];
                    let (a, b) = if i < j { (i, j) } else { (j, i) };

                    let tour = &solution.tour;
                    let before = instance.distance(tour[a], tour[a + 1]) as u64
                        + instance.distance(tour[b], tour[(b + 1) % n]) as u64;
                    let after = instance.distance(tour[a], tour[b]) as u64
                        + instance.distance(tour[a + 1], tour[(b + 1) % n]) as u64;

                    // Strict improvement only; adjacent-edge and
                    // whole-interior configurations compare equal and are
                    // rejected here, so no-op reversals never happen
                    if after < before {
                        solution.apply_two_opt(a, b);
                        for p in a + 1..=b {
                            position[solution.tour[p]] = p;
                        }
                        solution.length -= before - after;
                        moves += 1;
                        continue 'rescan;
                    }
                }

                break;
            }
        }

        moves
    }
}

impl LocalSearch for TwoOptSearch<'_> {
    fn improve(&self, instance: &TspInstance, solution: &mut Solution) -> bool {
        let n = solution.tour.len();
        // With fewer than 4 nodes every 2-opt move is a no-op
        if n < 4 {
            return false;
        }

        let mut position = vec![0usize; n];
        for (pos, &node) in solution.tour.iter().enumerate() {
            position[node] = pos;
        }

        let mut total_moves = 0;

        // Fixed-point iteration: repeat sweeps until one applies nothing
        loop {
            let moves = self.sweep(instance, solution, &mut position);
            total_moves += moves;
            if moves == 0 {
                break;
            }
        }

        total_moves > 0
    }

    fn name(&self) -> &str {
        "2-Opt-NL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::construction::{ConstructionHeuristic, GreedyNearestNeighbor};
    use crate::instance::Point;

    fn square() -> TspInstance {
        TspInstance::new(
            "square",
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 0.0),
            ],
        )
    }

    fn scatter(n: usize) -> TspInstance {
        // Deterministic pseudo-random scatter
        let points: Vec<Point> = (0..n)
            .map(|i| Point::new((i * 37 % 101) as f64, (i * 73 % 97) as f64))
            .collect();
        TspInstance::new("scatter", points)
    }

    #[test]
    fn test_uncrosses_square() {
        let instance = square();
        let neighbors = NeighborIndex::build(&instance, 20);
        let search = TwoOptSearch::new(&neighbors);

        // Crossing order, length 48
        let mut sol = Solution::from_tour(&instance, vec![0, 1, 3, 2], "test");
        assert_eq!(sol.length, 48);

        assert!(search.improve(&instance, &mut sol));
        assert_eq!(sol.length, 40);
        assert!(sol.is_complete(&instance));
        assert_eq!(sol.length, instance.tour_length(&sol.tour));
    }

    #[test]
    fn test_converged_pass_is_idempotent() {
        let instance = square();
        let neighbors = NeighborIndex::build(&instance, 20);
        let search = TwoOptSearch::new(&neighbors);

        let mut sol = Solution::from_tour(&instance, vec![0, 1, 2, 3], "test");
        assert!(!search.improve(&instance, &mut sol));
        assert_eq!(sol.tour, vec![0, 1, 2, 3]);
        assert_eq!(sol.length, 40);
    }

    #[test]
    fn test_small_tours_untouched() {
        let instance = TspInstance::new(
            "tri",
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(0.0, 5.0),
            ],
        );
        let neighbors = NeighborIndex::build(&instance, 20);
        let search = TwoOptSearch::new(&neighbors);
        let mut sol = Solution::from_tour(&instance, vec![2, 0, 1], "test");
        let before = sol.tour.clone();
        assert!(!search.improve(&instance, &mut sol));
        assert_eq!(sol.tour, before);
    }

    #[test]
    fn test_improves_scatter_and_keeps_length_consistent() {
        let instance = scatter(40);
        let neighbors = NeighborIndex::build(&instance, 10);
        let search = TwoOptSearch::new(&neighbors);

        let greedy = GreedyNearestNeighbor::new().construct(&instance);
        let mut sol = greedy.clone();
        search.improve(&instance, &mut sol);

        assert!(sol.is_complete(&instance));
        assert!(sol.length <= greedy.length);
        // Incrementally maintained length must agree with a full recount
        assert_eq!(sol.length, instance.tour_length(&sol.tour));

        // Already at a fixed point: a further pass changes nothing
        let frozen = sol.tour.clone();
        assert!(!search.improve(&instance, &mut sol));
        assert_eq!(sol.tour, frozen);
    }

    #[test]
    fn test_short_neighbor_lists_tolerated() {
        let instance = scatter(6);
        // k larger than n - 1 gets clamped; search must still work
        let neighbors = NeighborIndex::build(&instance, 50);
        let search = TwoOptSearch::new(&neighbors);

        let mut sol = GreedyNearestNeighbor::new().construct(&instance);
        search.improve(&instance, &mut sol);
        assert!(sol.is_complete(&instance));
        assert_eq!(sol.length, instance.tour_length(&sol.tour));
    }
}
