//! Precomputed nearest-neighbor candidate lists.
//!
//! For each node the index stores its k nearest other nodes in ascending
//! distance order. Local search only examines these candidates instead of
//! all n nodes, turning a move-search pass from O(n^2) into O(n*k).

use crate::instance::TspInstance;

/// Default candidate list size. Larger values widen the 2-opt search at the
/// cost of slower sweeps; 20 is a common choice for instances up to a few
/// thousand nodes.
pub const DEFAULT_NEIGHBOR_LIST_SIZE: usize = 20;

/// Per-node lists of nearest neighbors, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    /// Effective list size, min(requested k, n - 1)
    pub k: usize,
    lists: Vec<Vec<usize>>,
}

impl NeighborIndex {
    /// Build candidate lists for every node.
    ///
    /// Each list holds the `min(k, n - 1)` nearest other nodes in
    /// non-decreasing distance order (stable sort, so equidistant nodes
    /// keep index order), followed by the node's own index as a terminal
    /// entry. Consumers must skip that self-entry; it is kept for
    /// compatibility with the original candidate-list layout.
    ///
    /// O(n^2 log n) construction.
    pub fn build(instance: &TspInstance, k: usize) -> Self {
        let n = instance.dimension;
        let k = k.min(n.saturating_sub(1));
        let mut lists = Vec::with_capacity(n);

        for i in 0..n {
            let mut others: Vec<usize> = (0..n).filter(|&j| j != i).collect();
            others.sort_by_key(|&j| instance.distance(i, j));
            others.truncate(k);
            others.push(i);
            lists.push(others);
        }

        NeighborIndex { k, lists }
    }

    /// Candidate partners for a node, nearest first. The last entry is the
    /// node itself and must be skipped by callers.
    #[inline]
    pub fn candidates(&self, node: usize) -> &[usize] {
        &self.lists[node]
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Point;

    fn line_instance() -> TspInstance {
        // Nodes on a line at x = 0, 1, 3, 7, 15
        TspInstance::new(
            "line",
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(7.0, 0.0),
                Point::new(15.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_lists_sorted_and_correct() {
        let instance = line_instance();
        let index = NeighborIndex::build(&instance, 3);

        assert_eq!(index.k, 3);
        // Nearest to node 0 are 1 (d=1), 2 (d=3), 3 (d=7), then self
        assert_eq!(index.candidates(0), &[1, 2, 3, 0]);
        // Nearest to node 2 are 1 (d=2), 0 (d=3), 3 (d=4)
        assert_eq!(index.candidates(2), &[1, 0, 3, 2]);
    }

    #[test]
    fn test_self_entry_is_last() {
        let instance = line_instance();
        let index = NeighborIndex::build(&instance, 2);
        for i in 0..instance.dimension {
            assert_eq!(*index.candidates(i).last().unwrap(), i);
            assert_eq!(index.candidates(i).len(), 3);
        }
    }

    #[test]
    fn test_k_clamped_to_dimension() {
        let instance = line_instance();
        let index = NeighborIndex::build(&instance, 100);
        assert_eq!(index.k, 4);
        for i in 0..instance.dimension {
            // 4 neighbors plus the self-entry
            assert_eq!(index.candidates(i).len(), 5);
        }
    }

    #[test]
    fn test_distance_ties_keep_index_order() {
        // Nodes 1 and 2 are equidistant from node 0
        let instance = TspInstance::new(
            "tie",
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 5.0),
                Point::new(5.0, 0.0),
            ],
        );
        let index = NeighborIndex::build(&instance, 2);
        assert_eq!(index.candidates(0), &[1, 2, 0]);
    }

    #[test]
    fn test_degenerate_sizes() {
        let empty = TspInstance::new("e", vec![]);
        let index = NeighborIndex::build(&empty, 20);
        assert_eq!(index.k, 0);
        assert!(index.is_empty());

        let single = TspInstance::new("s", vec![Point::new(0.0, 0.0)]);
        let index = NeighborIndex::build(&single, 20);
        assert_eq!(index.k, 0);
        assert_eq!(index.candidates(0), &[0]);
    }
}
