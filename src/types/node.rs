//! The node struct: color plus insertion-ordered adjacency.

use indexmap::IndexMap;

use super::{EdgeId, NodeKey};

/// A node in the graph: an optional color and an adjacency mapping from
/// neighbor key to the shared edge record for that edge.
///
/// Adjacency is insertion-ordered, so neighbor listings reproduce the order
/// in which edges were added.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) color: Option<String>,
    pub(crate) adjacency: IndexMap<NodeKey, EdgeId>,
}

impl Node {
    /// Create an isolated node with the given color.
    pub(crate) fn new(color: Option<&str>) -> Self {
        Self {
            color: color.map(str::to_owned),
            adjacency: IndexMap::new(),
        }
    }

    /// The node's color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Neighbor keys in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of outgoing adjacency entries.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}
