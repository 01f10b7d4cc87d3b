//! Module for parsing and representing Euclidean TSP instances.
//!
//! An instance is a set of 2-D points read from a simple line-oriented
//! format (a count followed by coordinate pairs). Pairwise distances are
//! precomputed once into a symmetric integer matrix.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use serde::{Deserialize, Serialize};

/// A point in the plane. Nodes are identified by their index in the
/// instance's point list; indices are stable for the lifetime of a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point, rounded to the nearest integer.
    ///
    /// Rounding is half-away-from-zero (`f64::round`), applied consistently
    /// everywhere so results are reproducible.
    pub fn distance(&self, other: &Point) -> u32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round() as u32
    }
}

/// Represents a complete TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TspInstance {
    /// Name of the instance
    pub name: String,
    /// Number of nodes
    pub dimension: usize,
    /// List of all points, indexed by node id
    pub points: Vec<Point>,
    /// Precomputed symmetric distance matrix
    #[serde(skip)]
    pub distance_matrix: Vec<Vec<u32>>,
}

impl TspInstance {
    /// Build an instance from a list of points, computing the distance
    /// matrix up front (O(n^2) time and space).
    pub fn new(name: &str, points: Vec<Point>) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&points);
        TspInstance {
            name: name.to_string(),
            dimension: points.len(),
            points,
            distance_matrix,
        }
    }

    /// Parse an instance from a reader.
    ///
    /// Expected format: an integer `n`, then `n` coordinate pairs, all
    /// whitespace/newline separated. Anything else is a fatal format error.
    pub fn from_reader<R: Read>(name: &str, mut reader: R) -> Result<Self, String> {
        let mut buf = String::new();
        reader
            .read_to_string(&mut buf)
            .map_err(|e| format!("Read error: {}", e))?;

        let mut tokens = buf.split_whitespace();

        let count_token = tokens
            .next()
            .ok_or_else(|| "Missing point count".to_string())?;
        let n: usize = count_token
            .parse()
            .map_err(|_| format!("Invalid point count '{}'", count_token))?;

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let x = Self::parse_coordinate(tokens.next(), i, n, "x")?;
            let y = Self::parse_coordinate(tokens.next(), i, n, "y")?;
            points.push(Point::new(x, y));
        }

        Ok(Self::new(name, points))
    }

    fn parse_coordinate(
        token: Option<&str>,
        index: usize,
        n: usize,
        axis: &str,
    ) -> Result<f64, String> {
        let token = token.ok_or_else(|| {
            format!("Expected {} coordinate pairs, input ended at point {}", n, index)
        })?;
        token
            .parse()
            .map_err(|_| format!("Invalid {} coordinate '{}' for point {}", axis, token, index))
    }

    /// Parse an instance from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "instance".to_string());
        let file = File::open(&path).map_err(|e| format!("Cannot open file: {}", e))?;
        Self::from_reader(&name, BufReader::new(file))
    }

    /// Parse an instance from standard input
    pub fn from_stdin() -> Result<Self, String> {
        Self::from_reader("stdin", io::stdin().lock())
    }

    /// Compute the rounded Euclidean distance matrix
    fn compute_distance_matrix(points: &[Point]) -> Vec<Vec<u32>> {
        let n = points.len();
        let mut matrix = vec![vec![0u32; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }

        matrix
    }

    /// Get the distance between two nodes
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> u32 {
        self.distance_matrix[i][j]
    }

    /// Calculate total length of a closed tour (the edge from the last
    /// node back to the first is implied). Summed in u64 so large
    /// instances cannot overflow.
    pub fn tour_length(&self, tour: &[usize]) -> u64 {
        if tour.len() < 2 {
            return 0;
        }

        let mut length = 0u64;
        for i in 0..tour.len() - 1 {
            length += self.distance(tour[i], tour[i + 1]) as u64;
        }

        length += self.distance(tour[tour.len() - 1], tour[0]) as u64;

        length
    }

    /// Get statistics about the instance
    pub fn statistics(&self) -> InstanceStatistics {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let mut sum = 0u64;
        let mut pairs = 0u64;
        let mut max_distance = 0u32;
        for i in 0..self.dimension {
            for j in (i + 1)..self.dimension {
                let d = self.distance(i, j);
                sum += d as u64;
                pairs += 1;
                max_distance = max_distance.max(d);
            }
        }
        let avg_distance = if pairs > 0 { sum as f64 / pairs as f64 } else { 0.0 };

        InstanceStatistics {
            name: self.name.clone(),
            dimension: self.dimension,
            width: if self.dimension > 0 { max_x - min_x } else { 0.0 },
            height: if self.dimension > 0 { max_y - min_y } else { 0.0 },
            avg_distance,
            max_distance,
        }
    }
}

/// Statistics about a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatistics {
    pub name: String,
    pub dimension: usize,
    pub width: f64,
    pub height: f64,
    pub avg_distance: f64,
    pub max_distance: u32,
}

impl std::fmt::Display for InstanceStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance: {}", self.name)?;
        writeln!(f, "  Nodes: {}", self.dimension)?;
        writeln!(f, "  Bounding box: {:.2} x {:.2}", self.width, self.height)?;
        writeln!(f, "  Avg distance: {:.2}", self.avg_distance)?;
        writeln!(f, "  Max distance: {}", self.max_distance)
    }
}
