//! Construction heuristics producing an initial tour.

use crate::instance::TspInstance;
use crate::solution::Solution;

/// Trait for tour construction heuristics
pub trait ConstructionHeuristic {
    fn construct(&self, instance: &TspInstance) -> Solution;
    fn name(&self) -> &str;
}

/// Greedy Nearest Neighbor Heuristic
///
/// Builds a tour by starting at node 0 and repeatedly appending the
/// nearest not-yet-visited node. Ties are broken by the lowest index
/// (strict less-than scan in index order), so the result is fully
/// deterministic. Fast, low-quality baseline for local search.
pub struct GreedyNearestNeighbor;

impl GreedyNearestNeighbor {
    pub fn new() -> Self {
        GreedyNearestNeighbor
    }

    fn find_nearest(&self, instance: &TspInstance, current: usize, used: &[bool]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for j in 0..instance.dimension {
            if used[j] {
                continue;
            }
            match best {
                None => best = Some(j),
                Some(b) => {
                    if instance.distance(current, j) < instance.distance(current, b) {
                        best = Some(j);
                    }
                }
            }
        }
        best
    }
}

impl Default for GreedyNearestNeighbor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructionHeuristic for GreedyNearestNeighbor {
    fn construct(&self, instance: &TspInstance) -> Solution {
        let start = std::time::Instant::now();
        let n = instance.dimension;

        if n == 0 {
            return Solution::from_tour(instance, Vec::new(), self.name());
        }

        let mut tour = Vec::with_capacity(n);
        let mut used = vec![false; n];
        tour.push(0);
        used[0] = true;

        while tour.len() < n {
            let current = *tour.last().unwrap();
            match self.find_nearest(instance, current, &used) {
                Some(next) => {
                    tour.push(next);
                    used[next] = true;
                }
                None => break,
            }
        }

        let mut solution = Solution::from_tour(instance, tour, self.name());
        solution.computation_time = start.elapsed().as_secs_f64();
        solution
    }

    fn name(&self) -> &str {
        "GreedyNearestNeighbor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Point;

    #[test]
    fn test_greedy_is_permutation() {
        let points: Vec<Point> = (0..12)
            .map(|i| Point::new((i * 7 % 12) as f64, (i * 5 % 9) as f64))
            .collect();
        let instance = TspInstance::new("t", points);
        let sol = GreedyNearestNeighbor::new().construct(&instance);
        assert!(sol.is_complete(&instance));
        assert_eq!(sol.tour[0], 0);
    }

    #[test]
    fn test_greedy_follows_nearest() {
        // A line of points: greedy from 0 must walk it left to right
        let instance = TspInstance::new(
            "line",
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(4.0, 0.0),
            ],
        );
        let sol = GreedyNearestNeighbor::new().construct(&instance);
        assert_eq!(sol.tour, vec![0, 1, 2, 3]);
        assert_eq!(sol.length, 8);
    }

    #[test]
    fn test_greedy_tie_breaks_to_lowest_index() {
        // Nodes 1 and 2 are equidistant from node 0
        let instance = TspInstance::new(
            "tie",
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 5.0),
                Point::new(5.0, 0.0),
            ],
        );
        let sol = GreedyNearestNeighbor::new().construct(&instance);
        assert_eq!(sol.tour, vec![0, 1, 2]);
    }

    #[test]
    fn test_greedy_degenerate_sizes() {
        let empty = TspInstance::new("e", vec![]);
        let sol = GreedyNearestNeighbor::new().construct(&empty);
        assert!(sol.tour.is_empty());

        let single = TspInstance::new("s", vec![Point::new(2.0, 3.0)]);
        let sol = GreedyNearestNeighbor::new().construct(&single);
        assert_eq!(sol.tour, vec![0]);
        assert_eq!(sol.length, 0);
    }
}
