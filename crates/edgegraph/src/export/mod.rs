//! Export module for visualizing graphs in external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools, plus adjacency matrix dumps
//!
//! Output layouts are a presentation concern and may change between releases.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_adjacency_json, export_json};

use crate::{Graph, NodeId, NodeRef};
use std::collections::BTreeMap;

/// Endpoints of every stored edge, one handle per node id (first seen wins).
fn collect_nodes<T>(graph: &Graph<T>) -> BTreeMap<NodeId, &NodeRef<T>> {
    let mut nodes = BTreeMap::new();
    for edge in graph.edges() {
        let (a, b) = edge.node_pair();
        nodes.entry(a.id()).or_insert(a);
        nodes.entry(b.id()).or_insert(b);
    }
    nodes
}
