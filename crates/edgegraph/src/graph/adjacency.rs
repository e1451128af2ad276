//! Adjacency matrix derivation.
//!
//! The "matrix" is a sparse map from each source node to the ordered list of
//! `(destination, edge)` pairs leaving it. It is rebuilt from scratch on
//! every request and never cached by the graph.

use super::edge::{DirectedEdge, EdgeId, EdgeRef, UndirectedEdge};
use super::node::{Node, NodeId, NodeRef};
use log::{trace, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A `(destination, edge)` entry in an adjacency list.
pub type Adjacent<T> = (NodeRef<T>, EdgeRef<T>);

#[derive(Debug)]
struct AdjacencyRow<T> {
    node: NodeRef<T>,
    neighbors: Vec<Adjacent<T>>,
}

/// Per-source adjacency lists, keyed and iterated by ascending node id.
///
/// Nodes that share an id share a row; the row keeps the handle of the first
/// node inserted under that id. Nodes with no outgoing entry have no row.
#[derive(Debug)]
pub struct AdjacencyMatrix<T> {
    rows: BTreeMap<NodeId, AdjacencyRow<T>>,
}

impl<T> AdjacencyMatrix<T> {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Derive the matrix from edges in iteration order.
    ///
    /// Stops at the first plain edge and returns the partial matrix along
    /// with that edge's id.
    pub(crate) fn derive<'a, I>(edges: I) -> (Self, Option<EdgeId>)
    where
        I: IntoIterator<Item = &'a EdgeRef<T>>,
        T: 'a,
    {
        let mut adj = Self::new();

        for edge in edges {
            match edge.is_directed() {
                Some(true) => {
                    let directed = DirectedEdge::reinterpret(edge);
                    trace!("Edge {} is directed", edge.id());
                    adj.insert(directed.from_node(), directed.to_node(), edge);
                }
                Some(false) => {
                    let undirected = UndirectedEdge::reinterpret(edge);
                    trace!("Edge {} is undirected", edge.id());
                    adj.insert(undirected.node1(), undirected.node2(), edge);
                    adj.insert(undirected.node2(), undirected.node1(), edge);
                }
                None => {
                    warn!(
                        "Edge {} is plain; adjacency derivation stopped after {} rows",
                        edge.id(),
                        adj.len()
                    );
                    return (adj, Some(edge.id()));
                }
            }
        }

        (adj, None)
    }

    fn insert(&mut self, from: &NodeRef<T>, to: &NodeRef<T>, edge: &EdgeRef<T>) {
        self.rows
            .entry(from.id())
            .or_insert_with(|| AdjacencyRow {
                node: Rc::clone(from),
                neighbors: Vec::new(),
            })
            .neighbors
            .push((Rc::clone(to), Rc::clone(edge)));
    }

    /// Adjacency list of the row keyed by `node`'s id.
    pub fn get(&self, node: &Node<T>) -> Option<&[Adjacent<T>]> {
        self.get_by_id(node.id())
    }

    /// Adjacency list of the row keyed by `id`.
    pub fn get_by_id(&self, id: NodeId) -> Option<&[Adjacent<T>]> {
        self.rows.get(&id).map(|row| row.neighbors.as_slice())
    }

    /// Node handle stored as the key of row `id`.
    pub fn node(&self, id: NodeId) -> Option<&NodeRef<T>> {
        self.rows.get(&id).map(|row| &row.node)
    }

    /// Whether node `id` has at least one outgoing entry.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.rows.contains_key(&id)
    }

    /// Rows in ascending node id order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeRef<T>, &[Adjacent<T>])> + '_ {
        self.rows
            .values()
            .map(|row| (&row.node, row.neighbors.as_slice()))
    }

    /// Number of source nodes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no node has an outgoing entry.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of `(destination, edge)` entries across all rows.
    pub fn entry_count(&self) -> usize {
        self.rows.values().map(|row| row.neighbors.len()).sum()
    }
}

impl<T> Default for AdjacencyMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for AdjacencyMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .values()
                .zip(other.rows.values())
                .all(|(a, b)| a.node == b.node && a.neighbors == b.neighbors)
    }
}

impl<T> fmt::Display for AdjacencyMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency Matrix:")?;
        let max_columns = self
            .rows
            .values()
            .map(|row| row.neighbors.len())
            .max()
            .unwrap_or(0);
        if max_columns == 0 {
            return writeln!(f, "(empty)");
        }

        let separator = format!("|--|{}", "-----|".repeat(max_columns));
        writeln!(f, "{separator}")?;
        for (id, row) in &self.rows {
            write!(f, "|N{id}|")?;
            for (node, edge) in &row.neighbors {
                write!(f, "N{},E{}|", node.id(), edge.id())?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}
