//! Error types for trellis
//!
//! Every rejected mutation or query aborts without partial mutation: a
//! failed `add_edge`/`remove_edge` leaves the adjacency structure, vertex
//! list, and edge list exactly as they were.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("cannot add an edge from vertex {0} to itself")]
    SelfLoop(String),

    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },
}

impl GraphError {
    /// Create an error for an edge mutation referencing an unknown vertex
    pub fn vertex_not_found(id: impl Into<String>) -> Self {
        GraphError::VertexNotFound(id.into())
    }

    /// Create an error for an edge weight outside the accepted range
    pub fn invalid_weight(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        GraphError::InvalidWeight {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Create an error for a failed operation with a reason
    pub fn failed_operation(operation: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, GraphError>;
