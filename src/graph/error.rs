//! Error type for graph construction, lookups and shortest path searches.

use thiserror::Error;

use super::dot_parser::Rule;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node index {idx} is out of bounds: the graph has {node_count} nodes")]
    NodeIndexOutOfBounds { idx: usize, node_count: usize },

    #[error("no node named '{0}' exists in the graph")]
    UnknownNode(String),

    #[error("negative weight {weight} on edge {src_name} -> {dst_name}: shortest path search requires non-negative weights")]
    NegativeWeight {
        src_name: String,
        dst_name: String,
        weight: f64,
    },

    #[error("predecessor chain of node {0} does not lead back to the source")]
    CorruptPredecessors(usize),

    #[error("invalid dot input: {0}")]
    Parse(String),
}

impl From<pest::error::Error<Rule>> for GraphError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        GraphError::Parse(err.to_string())
    }
}
