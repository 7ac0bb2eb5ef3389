//! Fluent API for building ColorGraph instances.

use crate::types::{GraphResult, NodeKey};

use super::ColorGraph;

/// Fluent builder for constructing a [`ColorGraph`].
///
/// Nodes and edges are staged and validated together at [`build`](Self::build),
/// so an edge may be declared before its endpoints. Both key policies are
/// available: explicit caller-chosen keys via [`node`](Self::node), and
/// sequential auto-assigned keys via [`auto_node`](Self::auto_node).
pub struct GraphBuilder {
    directed: bool,
    nodes: Vec<(NodeKey, Option<String>)>,
    edges: Vec<(NodeKey, NodeKey, Option<String>, Option<f64>)>,
    next_key: NodeKey,
}

impl GraphBuilder {
    /// Create a new builder for a graph of the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
            next_key: 0,
        }
    }

    /// Stage a node under an explicit key.
    pub fn node(&mut self, key: NodeKey, color: Option<&str>) -> &mut Self {
        self.nodes.push((key, color.map(str::to_owned)));
        self.next_key = self.next_key.max(key.saturating_add(1));
        self
    }

    /// Stage a node under the next sequential key and return that key.
    pub fn auto_node(&mut self, color: Option<&str>) -> NodeKey {
        let key = self.next_key;
        self.next_key += 1;
        self.nodes.push((key, color.map(str::to_owned)));
        key
    }

    /// Stage an unadorned edge.
    pub fn edge(&mut self, u: NodeKey, v: NodeKey) -> &mut Self {
        self.edge_with(u, v, None, None)
    }

    /// Stage an edge with attributes.
    pub fn edge_with(
        &mut self,
        u: NodeKey,
        v: NodeKey,
        color: Option<&str>,
        weight: Option<f64>,
    ) -> &mut Self {
        self.edges
            .push((u, v, color.map(str::to_owned), weight));
        self
    }

    /// Build the final graph. Fails with [`GraphError::NodeNotFound`] if any
    /// staged edge references a key that was never staged as a node.
    ///
    /// [`GraphError::NodeNotFound`]: crate::types::GraphError::NodeNotFound
    pub fn build(self) -> GraphResult<ColorGraph> {
        let mut graph = ColorGraph::new(self.directed);
        for (key, color) in &self.nodes {
            graph.add_node(*key, color.as_deref());
        }
        for (u, v, color, weight) in &self.edges {
            graph.add_edge(*u, *v, color.as_deref(), *weight)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}
