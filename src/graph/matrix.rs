//! Dense adjacency-matrix projection.

use crate::types::{GraphError, GraphResult};

use super::ColorGraph;

impl ColorGraph {
    /// Materialize the adjacency mapping as a dense n x n matrix, where n is
    /// the node count. Cell `[u][v]` is 1 iff `v` is a neighbor of `u`.
    ///
    /// Requires every node key to be usable as a dense index in
    /// `0..node_count`; a key outside that range is reported as
    /// [`GraphError::KeyOutOfRange`] before anything is written. This is an
    /// O(n^2) on-demand projection, not the primary storage.
    pub fn adjacency_matrix(&self) -> GraphResult<Vec<Vec<u8>>> {
        let n = self.node_count();
        for key in self.node_keys() {
            if key as usize >= n {
                return Err(GraphError::KeyOutOfRange { key, node_count: n });
            }
        }

        let mut matrix = vec![vec![0u8; n]; n];
        for u in self.node_keys() {
            for v in self.neighbors(u)? {
                // Neighbors are node keys, all validated against 0..n above.
                matrix[u as usize][v as usize] = 1;
            }
        }
        Ok(matrix)
    }
}
