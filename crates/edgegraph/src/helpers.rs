//! Convenience helpers for building graphs.
//!
//! These wrap the handle plumbing (`Rc` construction, widening an oriented
//! edge into a base [`EdgeRef`]) so a graph can be assembled in a few lines.
//! Each `add_*` helper returns the handle it inserted, even when an equal
//! edge was already stored.

use crate::graph::{
    DirectedEdge, Edge, EdgeId, EdgeRef, Graph, Node, NodeId, NodeRef, UndirectedEdge,
};
use std::rc::Rc;

/// Create a shared node handle.
pub fn node<T>(id: NodeId, data: T) -> NodeRef<T> {
    Node::shared(id, data)
}

/// Create shared node handles with ids `0, 1, 2, ...` in payload order.
pub fn nodes<T, I>(data: I) -> Vec<NodeRef<T>>
where
    I: IntoIterator<Item = T>,
{
    (0..)
        .zip(data)
        .map(|(id, data)| Node::shared(id, data))
        .collect()
}

/// Add a directed edge `from → to`.
pub fn add_directed<T>(
    graph: &mut Graph<T>,
    id: EdgeId,
    from: &NodeRef<T>,
    to: &NodeRef<T>,
) -> EdgeRef<T> {
    insert(graph, DirectedEdge::new(id, from, to).into_ref())
}

/// Add an undirected edge between two nodes.
pub fn add_undirected<T>(
    graph: &mut Graph<T>,
    id: EdgeId,
    node1: &NodeRef<T>,
    node2: &NodeRef<T>,
) -> EdgeRef<T> {
    insert(graph, UndirectedEdge::new(id, node1, node2).into_ref())
}

/// Add a plain edge between two nodes.
pub fn add_plain<T>(
    graph: &mut Graph<T>,
    id: EdgeId,
    node1: &NodeRef<T>,
    node2: &NodeRef<T>,
) -> EdgeRef<T> {
    insert(graph, Edge::new(id, node1, node2).into_ref())
}

/// Link consecutive nodes with directed edges: `n[0] → n[1] → ... → n[k]`.
///
/// Edge ids start at `first_id` and increase by one per edge.
pub fn add_directed_chain<T>(
    graph: &mut Graph<T>,
    first_id: EdgeId,
    chain: &[NodeRef<T>],
) -> Vec<EdgeRef<T>> {
    (first_id..)
        .zip(chain.windows(2))
        .map(|(id, pair)| add_directed(graph, id, &pair[0], &pair[1]))
        .collect()
}

fn insert<T>(graph: &mut Graph<T>, edge: EdgeRef<T>) -> EdgeRef<T> {
    graph.add_edge(Rc::clone(&edge));
    edge
}
