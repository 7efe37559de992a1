//! Graph-subsystem error type.

use thiserror::Error;

use wc_core::{CoreError, NodeId};

/// Errors produced by `wc-graph`.
///
/// Construction problems are reported eagerly by
/// [`RoadGraphBuilder::build`](crate::RoadGraphBuilder::build); a graph that
/// built successfully never yields a construction variant again.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate node id {0:?}")]
    DuplicateNode(String),

    #[error("node {id:?} is invalid: {reason}")]
    InvalidNode { id: String, reason: String },

    #[error("edge {from:?} -> {to:?} references unknown node {missing:?}")]
    UnknownEndpoint { from: String, to: String, missing: String },

    #[error("edge {0:?} -> {0:?} is a self-loop")]
    SelfLoop(String),

    #[error("edge {from:?} -> {to:?} has invalid {field}: {value}")]
    InvalidWeight {
        from:  String,
        to:    String,
        field: &'static str,
        value: f64,
    },

    #[error("{0} is out of range for this graph")]
    NodeOutOfRange(NodeId),

    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("graph parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
