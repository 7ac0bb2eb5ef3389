//! All data types for the colorgraph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{EdgeAttributes, EdgeId};
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Node identifier. Any `u64` is a valid key; the dense adjacency-matrix
/// projection additionally requires keys to fall in `0..node_count`.
pub type NodeKey = u64;
