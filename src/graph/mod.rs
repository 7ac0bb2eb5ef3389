//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod color_graph;
pub mod data;
pub mod matrix;

pub use builder::GraphBuilder;
pub use color_graph::ColorGraph;
pub use data::{EdgeRecord, GraphData, LoadReport, NodeRecord};
