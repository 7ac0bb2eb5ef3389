//! Bulk-construction input structures and validation.
//!
//! An embedding application deserializes its own format (JSON or otherwise)
//! into [`GraphData`] and hands it to [`ColorGraph::from_data`]. Construction
//! always succeeds; problems degrade the result and are reported in the
//! accompanying [`LoadReport`] as explicit error values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{EdgeAttributes, GraphError, NodeKey};

use super::ColorGraph;

/// Pre-structured bulk input: a directedness flag and a node mapping.
///
/// Both fields are optional so that a malformed input can still be carried
/// to [`ColorGraph::from_data`], which degrades instead of aborting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    /// Whether the graph is directed.
    #[serde(default)]
    pub directed: Option<bool>,
    /// Node records keyed by node key.
    #[serde(default)]
    pub nodes: Option<IndexMap<NodeKey, NodeRecord>>,
}

/// A single node in the bulk input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node color, if any.
    #[serde(default)]
    pub color: Option<String>,
    /// Adjacency entries: neighbor key to edge attributes.
    #[serde(default)]
    pub adj: IndexMap<NodeKey, EdgeRecord>,
}

/// Edge attributes as they appear in the bulk input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge color, if any.
    #[serde(default)]
    pub color: Option<String>,
    /// Edge weight, if any.
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Outcome of a bulk construction: the issues encountered, in input order.
///
/// An empty report means the input was loaded verbatim.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Everything that had to be skipped, repaired, or defaulted.
    pub issues: Vec<GraphError>,
}

impl LoadReport {
    /// True if the input was loaded without any issue.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl ColorGraph {
    /// Build a graph from pre-structured bulk input.
    ///
    /// If the input is missing its directedness flag or its node mapping, the
    /// result is an empty undirected graph and the report carries a
    /// [`GraphError::Validation`] issue. Adjacency entries pointing at keys
    /// absent from the node mapping are skipped and reported. For an
    /// undirected input, a one-sided entry is repaired (both slots installed)
    /// and reported; when both sides are present with conflicting attributes,
    /// the first side encountered wins and the conflict is reported.
    pub fn from_data(data: GraphData) -> (ColorGraph, LoadReport) {
        let mut report = LoadReport::default();

        let (directed, records) = match (data.directed, data.nodes) {
            (Some(directed), Some(nodes)) => (directed, nodes),
            _ => {
                log::warn!(
                    "graph data missing directed flag or node mapping, \
                     falling back to empty undirected graph"
                );
                report.issues.push(GraphError::Validation(
                    "missing directed flag or node mapping".to_owned(),
                ));
                return (ColorGraph::new(false), report);
            }
        };

        let mut graph = ColorGraph::new(directed);
        for (&key, record) in &records {
            graph.add_node(key, record.color.as_deref());
        }

        for (&u, record) in &records {
            for (&v, attrs) in &record.adj {
                if !graph.is_node(v) {
                    report.issues.push(GraphError::NodeNotFound(v));
                    continue;
                }
                if graph.has_edge(u, v) {
                    // Mirror of an undirected edge installed earlier. Keep
                    // the first side's attributes, flag any divergence.
                    if let Ok(installed) = graph.edge_attributes(u, v) {
                        let incoming = EdgeAttributes {
                            color: attrs.color.clone(),
                            weight: attrs.weight,
                        };
                        if *installed != incoming {
                            report.issues.push(GraphError::Validation(format!(
                                "conflicting attributes for edge {u}-{v}, keeping first side"
                            )));
                        }
                    }
                    continue;
                }
                if !directed && u != v {
                    let mirrored = records
                        .get(&v)
                        .is_some_and(|r| r.adj.contains_key(&u));
                    if !mirrored {
                        report.issues.push(GraphError::Validation(format!(
                            "undirected edge {u}-{v} has no mirror entry, repaired"
                        )));
                    }
                }
                if let Err(err) = graph.add_edge(u, v, attrs.color.as_deref(), attrs.weight) {
                    report.issues.push(err);
                }
            }
        }

        (graph, report)
    }
}
