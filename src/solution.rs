//! Solution representation and manipulation for the TSP.
//!
//! A solution wraps a tour (a permutation of node indices, interpreted as
//! a closed cycle) together with its evaluated length and some metadata
//! about how it was produced.

use crate::instance::TspInstance;
use serde::{Deserialize, Serialize};

/// Represents a solution to a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The tour as a sequence of node indices; the edge from the last
    /// node back to the first is implied
    pub tour: Vec<usize>,
    /// Total tour length
    pub length: u64,
    /// Algorithm that generated this solution
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
    /// Number of improvement passes (if applicable)
    pub iterations: Option<usize>,
}

impl Solution {
    /// Create a new empty solution
    pub fn new() -> Self {
        Solution {
            tour: Vec::new(),
            length: 0,
            algorithm: String::new(),
            computation_time: 0.0,
            iterations: None,
        }
    }

    /// Create a solution from a tour, evaluating its length immediately.
    /// Every node id in the tour must be a valid index into the instance.
    pub fn from_tour(instance: &TspInstance, tour: Vec<usize>, algorithm: &str) -> Self {
        let length = instance.tour_length(&tour);
        Solution {
            tour,
            length,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
            iterations: None,
        }
    }

    /// Check that the tour visits every node exactly once
    pub fn is_complete(&self, instance: &TspInstance) -> bool {
        if self.tour.len() != instance.dimension {
            return false;
        }

        let mut seen = vec![false; instance.dimension];
        for &node in &self.tour {
            if node >= instance.dimension || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Apply a 2-opt move (reverse the segment between i+1 and j)
    pub fn apply_two_opt(&mut self, i: usize, j: usize) {
        self.tour[i + 1..=j].reverse();
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({})", self.algorithm)?;
        writeln!(f, "  Length: {}", self.length)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        if let Some(iter) = self.iterations {
            writeln!(f, "  Passes: {}", iter)?;
        }
        writeln!(f, "  Tour: {:?}", self.tour)
    }
}
