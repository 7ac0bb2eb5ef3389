//! colorgraph — a minimal, mutable graph container.
//!
//! Supports directed and undirected topology, per-node coloring, and per-edge
//! coloring and weighting. Storage is a sparse adjacency mapping; a dense
//! adjacency matrix is available as an on-demand projection. There are no
//! traversal algorithms and no I/O surface; bulk construction accepts an
//! already-parsed [`GraphData`] structure.
//!
//! ```
//! use colorgraph::ColorGraph;
//!
//! let mut graph = ColorGraph::new(false);
//! graph.add_node(0, None);
//! graph.add_node(1, None);
//! graph.add_edge(0, 1, Some("blue"), Some(17.0)).unwrap();
//! graph.color_node(0, Some("blue")).unwrap();
//! graph.color_node(1, Some("red")).unwrap();
//!
//! assert_eq!(graph.neighbors(0).unwrap(), vec![1]);
//! assert_eq!(graph.node_color(1).unwrap(), Some("red"));
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{ColorGraph, EdgeRecord, GraphBuilder, GraphData, LoadReport, NodeRecord};
pub use types::{EdgeAttributes, EdgeId, GraphError, GraphResult, Node, NodeKey};
