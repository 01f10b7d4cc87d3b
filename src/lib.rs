//! Euclidean TSP Heuristic Solver Library
//!
//! A time-budgeted heuristic solver for the symmetric Euclidean Traveling
//! Salesman Problem. It makes no optimality guarantee: the goal is a short
//! closed tour within a strict wall-clock budget.
//!
//! # Pipeline
//!
//! - Rounded-integer Euclidean distance matrix, computed once
//! - k-nearest-neighbor candidate lists to prune the local search
//! - Greedy nearest-neighbor construction for the initial tour
//! - 2-opt local search (first-improvement, neighbor-list candidates)
//! - A driver that repeats local-search fixed points under a time budget
//!
//! # Example
//!
//! ```no_run
//! use tsp_2opt_solver::instance::TspInstance;
//! use tsp_2opt_solver::solver::SearchDriver;
//!
//! // Load instance: a count followed by coordinate pairs
//! let instance = TspInstance::from_file("points.txt").unwrap();
//!
//! // Solve with default budget (just under 2 seconds) and k = 20
//! let solution = SearchDriver::default().solve(&instance);
//!
//! println!("Tour length: {}", solution.length);
//! ```

pub mod instance;
pub mod neighbors;
pub mod solution;
pub mod heuristics;
pub mod solver;

pub use instance::TspInstance;
pub use neighbors::NeighborIndex;
pub use solution::Solution;
pub use solver::{SearchDriver, SolverConfig};
