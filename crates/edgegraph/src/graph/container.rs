//! The [`Graph`] container: a set of shared edge handles.

use super::adjacency::AdjacencyMatrix;
use super::edge::{Edge, EdgeId, EdgeRef};
use super::options::{GraphOptions, PlainEdgePolicy};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A graph made of edge handles.
///
/// The graph never owns nodes; it holds shared handles to edges, which in
/// turn hold shared handles to their nodes. Edges iterate in ascending id
/// order. An edge equal to one already stored (same id, same node handles)
/// is not inserted twice.
///
/// Edge ids are not required to be unique: [`Graph::add_edge`] accepts a
/// second edge under an existing id if its endpoints differ, and such edges
/// iterate in insertion order within the id. [`Graph::try_add_edge`] refuses
/// them instead.
pub struct Graph<T> {
    options: GraphOptions,
    edges: BTreeMap<EdgeId, Vec<EdgeRef<T>>>,
    edge_count: usize,
}

impl<T> Graph<T> {
    /// Create an empty graph with default options.
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Create an empty graph with the given options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            edges: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Create a graph holding the given edges.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeRef<T>>,
    {
        let mut graph = Self::new();
        graph.set_edge_set(edges);
        graph
    }

    /// Options this graph was built with.
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Replace every stored edge with the given ones.
    pub fn set_edge_set<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = EdgeRef<T>>,
    {
        self.clear();
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Add an edge.
    ///
    /// Returns `false` without changing the graph if an equal edge is
    /// already present.
    pub fn add_edge(&mut self, edge: EdgeRef<T>) -> bool {
        let bucket = self.edges.entry(edge.id()).or_default();
        if bucket.iter().any(|stored| **stored == *edge) {
            trace!("Edge {} already present", edge.id());
            return false;
        }

        debug!("Adding edge: id={}, kind={}", edge.id(), edge.kind());
        bucket.push(edge);
        self.edge_count += 1;
        true
    }

    /// Add an edge, refusing ids already held by an edge with other endpoints.
    ///
    /// Re-adding an equal edge is still a no-op returning `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateEdgeId`] if the id is taken by a
    /// different edge.
    pub fn try_add_edge(&mut self, edge: EdgeRef<T>) -> Result<bool> {
        if let Some(bucket) = self.edges.get(&edge.id()) {
            if bucket.iter().any(|stored| **stored != *edge) {
                return Err(GraphError::DuplicateEdgeId { edge_id: edge.id() });
            }
        }
        Ok(self.add_edge(edge))
    }

    /// Remove the first edge stored under `id`.
    ///
    /// Returns the removed handle, or `None` if no edge has that id.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<EdgeRef<T>> {
        let bucket = self.edges.get_mut(&id)?;
        let removed = bucket.remove(0);
        if bucket.is_empty() {
            self.edges.remove(&id);
        }

        debug!("Removed edge: id={id}");
        self.edge_count -= 1;
        Some(removed)
    }

    /// Remove the first edge stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no edge has that id.
    pub fn try_remove_edge(&mut self, id: EdgeId) -> Result<EdgeRef<T>> {
        self.remove_edge(id)
            .ok_or(GraphError::EdgeNotFound { edge_id: id })
    }

    /// Get the first edge stored under `id`.
    pub fn get_edge(&self, id: EdgeId) -> Option<&EdgeRef<T>> {
        self.edges.get(&id).and_then(|bucket| bucket.first())
    }

    /// Whether an edge equal to `edge` is stored.
    pub fn contains_edge(&self, edge: &Edge<T>) -> bool {
        self.edges
            .get(&edge.id())
            .is_some_and(|bucket| bucket.iter().any(|stored| **stored == *edge))
    }

    /// Borrow the stored edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeRef<T>> + '_ {
        self.edges.values().flatten()
    }

    /// Snapshot of the stored edge handles in ascending id order.
    pub fn get_edge_set(&self) -> Vec<EdgeRef<T>> {
        self.edges().map(Rc::clone).collect()
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Drop every edge handle.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.edge_count = 0;
    }

    /// Derive the adjacency matrix, stopping silently at the first plain edge.
    ///
    /// Edges are processed in ascending id order, so only the edges ordered
    /// before the first plain one contribute. The configured
    /// [`PlainEdgePolicy`] is ignored here; see [`Graph::adjacency_matrix`].
    pub fn get_adj_matrix(&self) -> AdjacencyMatrix<T> {
        debug!("Deriving adjacency matrix from {} edges", self.edge_count);
        let (adj, _) = AdjacencyMatrix::derive(self.edges());
        adj
    }

    /// Derive the adjacency matrix under the configured [`PlainEdgePolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnclassifiedEdge`] when the policy is
    /// [`PlainEdgePolicy::Reject`] and a plain edge is stored.
    pub fn adjacency_matrix(&self) -> Result<AdjacencyMatrix<T>> {
        debug!(
            "Deriving adjacency matrix from {} edges ({:?})",
            self.edge_count, self.options.plain_edge_policy
        );
        match AdjacencyMatrix::derive(self.edges()) {
            (_, Some(edge_id)) if self.options.plain_edge_policy == PlainEdgePolicy::Reject => {
                Err(GraphError::UnclassifiedEdge { edge_id })
            }
            (adj, _) => Ok(adj),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph ({} edges):", self.edge_count)?;
        for edge in self.edges() {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}
