//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: Immutable id + payload values
//! - [`Edge`], [`DirectedEdge`], [`UndirectedEdge`]: Edge variants over node handles
//! - [`Graph`]: The edge container
//! - [`AdjacencyMatrix`]: Per-node adjacency lists derived from a graph

mod adjacency;
mod container;
mod edge;
mod node;
mod options;

pub use adjacency::{Adjacent, AdjacencyMatrix};
pub use container::Graph;
pub use edge::{DirectedEdge, Edge, EdgeId, EdgeKind, EdgeRef, NodePair, UndirectedEdge};
pub use node::{Node, NodeId, NodeRef};
pub use options::{GraphOptions, PlainEdgePolicy};
