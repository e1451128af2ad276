//! Graph nodes: an immutable id paired with a payload.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Identifier for a node (caller-assigned).
pub type NodeId = u64;

/// Shared handle to a node. Edges and adjacency entries hold these.
pub type NodeRef<T> = Rc<Node<T>>;

/// A node in the graph.
///
/// Nodes are plain values: once created, neither the id nor the data can
/// change. Equality looks at both id and data, while ordering looks at the
/// id alone, so two nodes that share an id but carry different data compare
/// as `Ordering::Equal` without being `==`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<T> {
    id: NodeId,
    data: T,
}

impl<T> Node<T> {
    /// Create a new node.
    pub fn new(id: NodeId, data: T) -> Self {
        Self { id, data }
    }

    /// Create a new node behind a shared handle.
    pub fn shared(id: NodeId, data: T) -> NodeRef<T> {
        Rc::new(Self::new(id, data))
    }

    /// Node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Payload carried by the node.
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.data == other.data
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialEq> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.id.cmp(&other.id))
    }
}

impl<T: Eq> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node: {{\n  Id:\t{}\n  Data:\t{}\n}}", self.id, self.data)
    }
}
