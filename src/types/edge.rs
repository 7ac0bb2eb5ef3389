//! Shared edge attribute records.

use serde::{Deserialize, Serialize};

/// Internal handle identifying a shared edge attribute record.
///
/// Both adjacency slots of an undirected edge hold the same `EdgeId`, so a
/// color or weight update through either endpoint is visible from the other.
pub type EdgeId = u64;

/// Attributes of a single logical edge: an optional color and an optional
/// numeric weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Color of the edge, if any.
    pub color: Option<String>,
    /// Weight of the edge, if any.
    pub weight: Option<f64>,
}

impl EdgeAttributes {
    /// Create an attribute record from borrowed inputs.
    pub fn new(color: Option<&str>, weight: Option<f64>) -> Self {
        Self {
            color: color.map(str::to_owned),
            weight,
        }
    }
}
