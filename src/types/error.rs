//! Error types for the colorgraph library.

use thiserror::Error;

use super::NodeKey;

/// All errors that can occur in the colorgraph library.
///
/// Every variant is recoverable: a failed operation reports the missing
/// key(s) and leaves the graph unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Referenced node key does not exist.
    #[error("node {0} not found")]
    NodeNotFound(NodeKey),

    /// No edge from `from` to `to`. The field names avoid `source`, which
    /// thiserror treats as the error's cause.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: NodeKey, to: NodeKey },

    /// Malformed bulk-construction input. Construction degrades to an
    /// empty undirected graph instead of aborting.
    #[error("invalid graph data: {0}")]
    Validation(String),

    /// A node key is not usable as a dense matrix index.
    #[error("node key {key} outside dense index range 0..{node_count}")]
    KeyOutOfRange { key: NodeKey, node_count: usize },
}

/// Convenience result type for colorgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
