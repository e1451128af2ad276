//! Error types for edgegraph operations.
//!
//! Only the checked entry points return [`Result<T>`]. The permissive paths
//! (`add_edge`, `remove_edge`, `get_edge`, `reinterpret`, `get_adj_matrix`)
//! report absence through `Option` or silently truncate instead.

use crate::graph::{EdgeId, EdgeKind};
use thiserror::Error;

/// Result type alias for edgegraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for the checked graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: EdgeId,
    },

    /// An edge with the same id but different endpoints is already stored
    #[error("Duplicate edge id: {edge_id} is already used by an edge with different endpoints")]
    DuplicateEdgeId {
        /// Conflicting edge id
        edge_id: EdgeId,
    },

    /// A base edge was converted into a variant it does not carry
    #[error("Orientation mismatch on edge {edge_id}: expected {expected}, got {actual}")]
    OrientationMismatch {
        /// ID of the converted edge
        edge_id: EdgeId,
        /// Variant that was requested
        expected: EdgeKind,
        /// Variant the edge actually carries
        actual: EdgeKind,
    },

    /// A plain edge was met while deriving the adjacency matrix
    #[error("Edge {edge_id} is neither directed nor undirected; cannot derive adjacency matrix")]
    UnclassifiedEdge {
        /// ID of the plain edge
        edge_id: EdgeId,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
