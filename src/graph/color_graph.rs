//! Core graph structure — colored nodes, colored/weighted edges, sparse
//! adjacency storage.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::types::{EdgeAttributes, EdgeId, GraphError, GraphResult, Node, NodeKey};

/// A mutable graph with directed or undirected topology, per-node coloring,
/// and per-edge coloring and weighting.
///
/// Primary storage is sparse: each node holds an insertion-ordered adjacency
/// mapping from neighbor key to an [`EdgeId`], and the graph owns one
/// [`EdgeAttributes`] record per logical edge. For an undirected graph the
/// two adjacency slots of an edge hold the same id, so updating the edge
/// through either endpoint is visible from the other.
#[derive(Debug, Clone)]
pub struct ColorGraph {
    directed: bool,
    nodes: IndexMap<NodeKey, Node>,
    edges: HashMap<EdgeId, EdgeAttributes>,
    next_edge_id: EdgeId,
    /// Next key handed out by [`add_auto_node`](Self::add_auto_node).
    /// Tracks past explicit keys so the two key policies can be mixed.
    next_key: NodeKey,
}

impl ColorGraph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: IndexMap::new(),
            edges: HashMap::new(),
            next_edge_id: 0,
            next_key: 0,
        }
    }

    /// Whether edge (u, v) implies edge (v, u).
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node keys in insertion order.
    pub fn node_keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys().copied()
    }

    /// Get a node by key.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(&key)
    }

    /// O(1) existence check.
    pub fn is_node(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Insert a node with an empty adjacency mapping and the given color.
    ///
    /// If the key is already present, only the color is updated; existing
    /// adjacency is preserved. Discarding adjacency here would leave dangling
    /// mirror entries in the neighbors of an undirected node.
    pub fn add_node(&mut self, key: NodeKey, color: Option<&str>) {
        match self.nodes.get_mut(&key) {
            Some(node) => node.color = color.map(str::to_owned),
            None => {
                self.nodes.insert(key, Node::new(color));
            }
        }
        self.next_key = self.next_key.max(key.saturating_add(1));
    }

    /// Insert a node under the next sequential key and return that key.
    ///
    /// The key counter saturates at `NodeKey::MAX`: once that key is taken,
    /// further auto inserts return `NodeKey::MAX` again and only update that
    /// node's color instead of allocating a fresh key.
    pub fn add_auto_node(&mut self, color: Option<&str>) -> NodeKey {
        let key = self.next_key;
        self.add_node(key, color);
        key
    }

    /// Set a node's color.
    pub fn color_node(&mut self, key: NodeKey, color: Option<&str>) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(&key)
            .ok_or(GraphError::NodeNotFound(key))?;
        node.color = color.map(str::to_owned);
        Ok(())
    }

    /// The color of a node.
    pub fn node_color(&self, key: NodeKey) -> GraphResult<Option<&str>> {
        let node = self.nodes.get(&key).ok_or(GraphError::NodeNotFound(key))?;
        Ok(node.color.as_deref())
    }

    /// Remove a node and every edge referencing it.
    ///
    /// Remaining nodes that never pointed at the removed key are skipped,
    /// not treated as an error.
    pub fn remove_node(&mut self, key: NodeKey) -> GraphResult<()> {
        let node = self
            .nodes
            .shift_remove(&key)
            .ok_or(GraphError::NodeNotFound(key))?;

        for id in node.adjacency.values() {
            self.edges.remove(id);
        }
        for other in self.nodes.values_mut() {
            if let Some(id) = other.adjacency.shift_remove(&key) {
                self.edges.remove(&id);
            }
        }
        Ok(())
    }

    /// Add an edge from `u` to `v` with the given attributes.
    ///
    /// Both endpoints must already exist; missing endpoints are reported as
    /// [`GraphError::NodeNotFound`] and nothing is created. For an undirected
    /// graph the same attribute record is installed at `v -> u` as well, so
    /// the pair is installed atomically or not at all. Re-adding an existing
    /// edge overwrites the shared record's attributes in place.
    pub fn add_edge(
        &mut self,
        u: NodeKey,
        v: NodeKey,
        color: Option<&str>,
        weight: Option<f64>,
    ) -> GraphResult<()> {
        if !self.nodes.contains_key(&u) {
            return Err(GraphError::NodeNotFound(u));
        }
        if !self.nodes.contains_key(&v) {
            return Err(GraphError::NodeNotFound(v));
        }

        if let Some(id) = self.edge_id(u, v) {
            if let Some(attrs) = self.edges.get_mut(&id) {
                *attrs = EdgeAttributes::new(color, weight);
            }
            return Ok(());
        }

        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.insert(id, EdgeAttributes::new(color, weight));

        if let Some(node) = self.nodes.get_mut(&u) {
            node.adjacency.insert(v, id);
        }
        if !self.directed && u != v {
            if let Some(node) = self.nodes.get_mut(&v) {
                node.adjacency.insert(u, id);
            }
        }
        Ok(())
    }

    /// True if an edge from `u` to `v` exists.
    pub fn has_edge(&self, u: NodeKey, v: NodeKey) -> bool {
        self.edge_id(u, v).is_some()
    }

    /// Set the color of an existing edge. The update goes through the shared
    /// record, so the symmetric counterpart of an undirected edge reflects it.
    pub fn color_edge(&mut self, u: NodeKey, v: NodeKey, color: Option<&str>) -> GraphResult<()> {
        let id = self.require_edge(u, v)?;
        if let Some(attrs) = self.edges.get_mut(&id) {
            attrs.color = color.map(str::to_owned);
        }
        Ok(())
    }

    /// Set the weight of an existing edge. Same contract as
    /// [`color_edge`](Self::color_edge).
    pub fn weigh_edge(&mut self, u: NodeKey, v: NodeKey, weight: Option<f64>) -> GraphResult<()> {
        let id = self.require_edge(u, v)?;
        if let Some(attrs) = self.edges.get_mut(&id) {
            attrs.weight = weight;
        }
        Ok(())
    }

    /// The attribute record of the edge from `u` to `v`.
    pub fn edge_attributes(&self, u: NodeKey, v: NodeKey) -> GraphResult<&EdgeAttributes> {
        let id = self.require_edge(u, v)?;
        self.edges
            .get(&id)
            .ok_or(GraphError::EdgeNotFound { from: u, to: v })
    }

    /// Remove the edge from `u` to `v`, and its mirror when undirected.
    pub fn remove_edge(&mut self, u: NodeKey, v: NodeKey) -> GraphResult<()> {
        let id = self.require_edge(u, v)?;
        if let Some(node) = self.nodes.get_mut(&u) {
            node.adjacency.shift_remove(&v);
        }
        if !self.directed && u != v {
            if let Some(node) = self.nodes.get_mut(&v) {
                node.adjacency.shift_remove(&u);
            }
        }
        self.edges.remove(&id);
        Ok(())
    }

    /// Neighbor keys of a node, in the order the edges were added.
    pub fn neighbors(&self, key: NodeKey) -> GraphResult<Vec<NodeKey>> {
        let node = self.nodes.get(&key).ok_or(GraphError::NodeNotFound(key))?;
        Ok(node.neighbors().collect())
    }

    /// The full adjacency listing: every node key mapped to its neighbor
    /// keys. Use [`neighbors`](Self::neighbors) to query a single node; the
    /// two are separate on purpose so that "no filter" and "filter by key 0"
    /// cannot be confused.
    pub fn adjacency(&self) -> IndexMap<NodeKey, Vec<NodeKey>> {
        self.nodes
            .iter()
            .map(|(&key, node)| (key, node.neighbors().collect()))
            .collect()
    }

    /// Look up the shared record id for `u -> v` without existence errors.
    fn edge_id(&self, u: NodeKey, v: NodeKey) -> Option<EdgeId> {
        self.nodes.get(&u).and_then(|n| n.adjacency.get(&v)).copied()
    }

    /// Resolve `u -> v` to its record id, reporting which lookup failed.
    fn require_edge(&self, u: NodeKey, v: NodeKey) -> GraphResult<EdgeId> {
        let node = self.nodes.get(&u).ok_or(GraphError::NodeNotFound(u))?;
        if !self.nodes.contains_key(&v) {
            return Err(GraphError::NodeNotFound(v));
        }
        node.adjacency
            .get(&v)
            .copied()
            .ok_or(GraphError::EdgeNotFound { from: u, to: v })
    }
}
