//! Edges: a base [`Edge`] plus its two oriented refinements.
//!
//! Every edge carries an [`EdgeKind`] tag. A base edge built with
//! [`Edge::new`] is [`EdgeKind::Plain`]: it has not been classified as
//! directed or undirected. [`DirectedEdge`] and [`UndirectedEdge`] pin the
//! tag and add oriented accessors. They widen into a base [`Edge`] (keeping
//! the tag) and can be recovered from one either by trusting the caller
//! ([`DirectedEdge::reinterpret`]) or through a checked `TryFrom`.

use super::node::{NodeId, NodeRef};
use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Identifier for an edge (caller-assigned, uniqueness not enforced).
pub type EdgeId = u64;

/// Ordered pair of node handles an edge connects.
pub type NodePair<T> = (NodeRef<T>, NodeRef<T>);

/// Shared handle to an edge. The graph stores these.
pub type EdgeRef<T> = Rc<Edge<T>>;

/// Orientation variant of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Neither directed nor undirected has been established
    Plain,
    /// Oriented first → second
    Directed,
    /// Symmetric between both endpoints
    Undirected,
}

impl EdgeKind {
    /// Directed capability flag for this variant.
    pub fn is_directed(self) -> Option<bool> {
        match self {
            EdgeKind::Plain => None,
            EdgeKind::Directed => Some(true),
            EdgeKind::Undirected => Some(false),
        }
    }

    /// Weighted capability flag for this variant. No variant is weighted yet.
    pub fn is_weighted(self) -> Option<bool> {
        match self {
            EdgeKind::Plain => None,
            EdgeKind::Directed | EdgeKind::Undirected => Some(false),
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Plain => write!(f, "Plain"),
            EdgeKind::Directed => write!(f, "Directed"),
            EdgeKind::Undirected => write!(f, "Undirected"),
        }
    }
}

/// An edge between two nodes.
///
/// Two edges are equal when they share an id and point at the *same* node
/// handles (`Rc::ptr_eq`); the kind does not take part. Ordering uses the
/// id alone.
#[derive(Debug)]
pub struct Edge<T> {
    id: EdgeId,
    nodes: NodePair<T>,
    kind: EdgeKind,
}

impl<T> Edge<T> {
    /// Create a plain edge between two nodes.
    pub fn new(id: EdgeId, node1: &NodeRef<T>, node2: &NodeRef<T>) -> Self {
        Self::from_pair(id, (Rc::clone(node1), Rc::clone(node2)))
    }

    /// Create a plain edge from an existing node pair.
    pub fn from_pair(id: EdgeId, nodes: NodePair<T>) -> Self {
        Self::with_kind(id, nodes, EdgeKind::Plain)
    }

    fn with_kind(id: EdgeId, nodes: NodePair<T>, kind: EdgeKind) -> Self {
        Self { id, nodes, kind }
    }

    /// Edge identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The two endpoint handles, in construction order.
    pub fn node_pair(&self) -> &NodePair<T> {
        &self.nodes
    }

    /// Orientation variant.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// `None` for a plain edge, otherwise whether the edge is directed.
    pub fn is_directed(&self) -> Option<bool> {
        self.kind.is_directed()
    }

    /// `None` for a plain edge, otherwise whether the edge is weighted.
    pub fn is_weighted(&self) -> Option<bool> {
        self.kind.is_weighted()
    }

    /// Ids of the two endpoints.
    pub fn endpoint_ids(&self) -> (NodeId, NodeId) {
        (self.nodes.0.id(), self.nodes.1.id())
    }

    /// Whether both edges point at the same node handles, in the same order.
    pub fn same_endpoints(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.nodes.0, &other.nodes.0) && Rc::ptr_eq(&self.nodes.1, &other.nodes.1)
    }

    /// Move the edge behind a shared handle.
    pub fn into_ref(self) -> EdgeRef<T> {
        Rc::new(self)
    }

    fn expect_kind(&self, expected: EdgeKind) -> Result<(), GraphError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(GraphError::OrientationMismatch {
                edge_id: self.id,
                expected,
                actual: self.kind,
            })
        }
    }
}

impl<T> Clone for Edge<T> {
    fn clone(&self) -> Self {
        Self::with_kind(
            self.id,
            (Rc::clone(&self.nodes.0), Rc::clone(&self.nodes.1)),
            self.kind,
        )
    }
}

impl<T> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.same_endpoints(other)
    }
}

impl<T> Eq for Edge<T> {}

impl<T> PartialOrd for Edge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Edge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = match self.kind {
            EdgeKind::Plain => ("?", "?"),
            EdgeKind::Directed => ("+", ">"),
            EdgeKind::Undirected => ("<", ">"),
        };
        let (a, b) = self.endpoint_ids();
        write!(
            f,
            "((Node: {a})) {left}----- |Edge: {}|-----{right} ((Node: {b}))",
            self.id
        )
    }
}

/// An edge oriented from its first node to its second.
#[derive(Debug)]
pub struct DirectedEdge<T> {
    edge: Edge<T>,
}

impl<T> DirectedEdge<T> {
    /// Create a directed edge `from → to`.
    pub fn new(id: EdgeId, from: &NodeRef<T>, to: &NodeRef<T>) -> Self {
        Self::from_pair(id, (Rc::clone(from), Rc::clone(to)))
    }

    /// Create a directed edge from an existing `(from, to)` pair.
    pub fn from_pair(id: EdgeId, nodes: NodePair<T>) -> Self {
        Self {
            edge: Edge::with_kind(id, nodes, EdgeKind::Directed),
        }
    }

    /// Read any base edge as directed, keeping its id and node pair.
    ///
    /// The stored kind is not consulted. Use `DirectedEdge::try_from` when
    /// the edge might not actually be directed.
    pub fn reinterpret(edge: &Edge<T>) -> Self {
        let (from, to) = edge.node_pair();
        Self::new(edge.id(), from, to)
    }

    /// Edge identifier.
    pub fn id(&self) -> EdgeId {
        self.edge.id()
    }

    /// Source node.
    pub fn from_node(&self) -> &NodeRef<T> {
        &self.edge.nodes.0
    }

    /// Destination node.
    pub fn to_node(&self) -> &NodeRef<T> {
        &self.edge.nodes.1
    }

    /// The `(from, to)` handles.
    pub fn node_pair(&self) -> &NodePair<T> {
        self.edge.node_pair()
    }

    /// Always `Some(true)`.
    pub fn is_directed(&self) -> Option<bool> {
        Some(true)
    }

    /// Always `Some(false)`.
    pub fn is_weighted(&self) -> Option<bool> {
        Some(false)
    }

    /// Borrow as a base edge.
    pub fn as_edge(&self) -> &Edge<T> {
        &self.edge
    }

    /// Widen into a shared base edge handle.
    pub fn into_ref(self) -> EdgeRef<T> {
        self.edge.into_ref()
    }
}

impl<T> Clone for DirectedEdge<T> {
    fn clone(&self) -> Self {
        Self {
            edge: self.edge.clone(),
        }
    }
}

impl<T> PartialEq for DirectedEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl<T> Eq for DirectedEdge<T> {}

impl<T> From<DirectedEdge<T>> for Edge<T> {
    fn from(edge: DirectedEdge<T>) -> Self {
        edge.edge
    }
}

impl<T> From<UndirectedEdge<T>> for DirectedEdge<T> {
    /// Impose the orientation `node1 → node2`.
    fn from(edge: UndirectedEdge<T>) -> Self {
        Self::from_pair(edge.edge.id, edge.edge.nodes)
    }
}

impl<T> TryFrom<&Edge<T>> for DirectedEdge<T> {
    type Error = GraphError;

    fn try_from(edge: &Edge<T>) -> Result<Self, Self::Error> {
        edge.expect_kind(EdgeKind::Directed)?;
        Ok(Self::reinterpret(edge))
    }
}

impl<T> TryFrom<Edge<T>> for DirectedEdge<T> {
    type Error = GraphError;

    fn try_from(edge: Edge<T>) -> Result<Self, Self::Error> {
        edge.expect_kind(EdgeKind::Directed)?;
        Ok(Self { edge })
    }
}

impl<T> fmt::Display for DirectedEdge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.edge, f)
    }
}

/// An edge with no orientation between its two nodes.
#[derive(Debug)]
pub struct UndirectedEdge<T> {
    edge: Edge<T>,
}

impl<T> UndirectedEdge<T> {
    /// Create an undirected edge between two nodes.
    pub fn new(id: EdgeId, node1: &NodeRef<T>, node2: &NodeRef<T>) -> Self {
        Self::from_pair(id, (Rc::clone(node1), Rc::clone(node2)))
    }

    /// Create an undirected edge from an existing node pair.
    pub fn from_pair(id: EdgeId, nodes: NodePair<T>) -> Self {
        Self {
            edge: Edge::with_kind(id, nodes, EdgeKind::Undirected),
        }
    }

    /// Read any base edge as undirected, keeping its id and node pair.
    ///
    /// The stored kind is not consulted. Use `UndirectedEdge::try_from` when
    /// the edge might not actually be undirected.
    pub fn reinterpret(edge: &Edge<T>) -> Self {
        let (node1, node2) = edge.node_pair();
        Self::new(edge.id(), node1, node2)
    }

    /// Edge identifier.
    pub fn id(&self) -> EdgeId {
        self.edge.id()
    }

    /// First endpoint.
    pub fn node1(&self) -> &NodeRef<T> {
        &self.edge.nodes.0
    }

    /// Second endpoint.
    pub fn node2(&self) -> &NodeRef<T> {
        &self.edge.nodes.1
    }

    /// The `(node1, node2)` handles.
    pub fn node_pair(&self) -> &NodePair<T> {
        self.edge.node_pair()
    }

    /// Always `Some(false)`.
    pub fn is_directed(&self) -> Option<bool> {
        Some(false)
    }

    /// Always `Some(false)`.
    pub fn is_weighted(&self) -> Option<bool> {
        Some(false)
    }

    /// Borrow as a base edge.
    pub fn as_edge(&self) -> &Edge<T> {
        &self.edge
    }

    /// Widen into a shared base edge handle.
    pub fn into_ref(self) -> EdgeRef<T> {
        self.edge.into_ref()
    }
}

impl<T> Clone for UndirectedEdge<T> {
    fn clone(&self) -> Self {
        Self {
            edge: self.edge.clone(),
        }
    }
}

impl<T> PartialEq for UndirectedEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl<T> Eq for UndirectedEdge<T> {}

impl<T> From<UndirectedEdge<T>> for Edge<T> {
    fn from(edge: UndirectedEdge<T>) -> Self {
        edge.edge
    }
}

impl<T> From<DirectedEdge<T>> for UndirectedEdge<T> {
    /// Drop the orientation, keeping id and node pair.
    fn from(edge: DirectedEdge<T>) -> Self {
        Self::from_pair(edge.edge.id, edge.edge.nodes)
    }
}

impl<T> TryFrom<&Edge<T>> for UndirectedEdge<T> {
    type Error = GraphError;

    fn try_from(edge: &Edge<T>) -> Result<Self, Self::Error> {
        edge.expect_kind(EdgeKind::Undirected)?;
        Ok(Self::reinterpret(edge))
    }
}

impl<T> TryFrom<Edge<T>> for UndirectedEdge<T> {
    type Error = GraphError;

    fn try_from(edge: Edge<T>) -> Result<Self, Self::Error> {
        edge.expect_kind(EdgeKind::Undirected)?;
        Ok(Self { edge })
    }
}

impl<T> fmt::Display for UndirectedEdge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.edge, f)
    }
}
