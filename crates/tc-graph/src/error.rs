//! Graph-subsystem error type.

use thiserror::Error;

use tc_core::VertexId;

/// Errors produced by `tc-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("edge {from} → {to} has invalid weight {weight}")]
    InvalidWeight { from: VertexId, to: VertexId, weight: String },

    #[error("edge list full: {count} edges do not fit in an EdgeId")]
    TooManyEdges { count: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
