//! # edgegraph
//!
//! An in-memory graph model with typed nodes, directed, undirected and plain
//! edges, and an adjacency matrix derived on demand.
//!
//! ## Core Principles
//!
//! - **Shared Handles**: Nodes and edges live behind `Rc`; graphs hold handles, never copies
//! - **Three Edge Variants**: Plain, directed and undirected edges share one tagged type
//! - **Derived, Not Stored**: The adjacency matrix is rebuilt on every request
//! - **Permissive by Default**: Lookups report absence with `Option`; checked `try_*` variants return errors
//!
//! ## Architecture
//!
//! ```text
//! Node<T>  (id + payload)
//!     ↓
//! Edge<T>  (id + node pair + kind)
//!     ↓
//! Graph<T> (ordered edge set)
//!     ↓
//! AdjacencyMatrix<T> (derived)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use edgegraph::{DirectedEdge, Graph, Node};
//!
//! let n0 = Node::shared(0, "parse");
//! let n1 = Node::shared(1, "check");
//!
//! let mut graph = Graph::new();
//! graph.add_edge(DirectedEdge::new(0, &n0, &n1).into_ref());
//!
//! let adj = graph.get_adj_matrix();
//! let row = adj.get(&n0).unwrap();
//! assert_eq!(row[0].0.id(), 1);
//! assert!(adj.get(&n1).is_none());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{
    Adjacent, AdjacencyMatrix, DirectedEdge, Edge, EdgeId, EdgeKind, EdgeRef, Graph,
    GraphOptions, Node, NodeId, NodePair, NodeRef, PlainEdgePolicy, UndirectedEdge,
};
