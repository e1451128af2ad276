//! Graph configuration.

/// What adjacency derivation does when it meets a plain edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlainEdgePolicy {
    /// Stop at the first plain edge and return the entries built so far
    #[default]
    Truncate,
    /// Fail with [`GraphError::UnclassifiedEdge`](crate::GraphError::UnclassifiedEdge)
    Reject,
}

/// Options controlling a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
    /// Handling of plain edges in [`Graph::adjacency_matrix`](crate::Graph::adjacency_matrix)
    pub plain_edge_policy: PlainEdgePolicy,
}

impl GraphOptions {
    /// Options that reject plain edges instead of truncating.
    pub fn strict() -> Self {
        Self {
            plain_edge_policy: PlainEdgePolicy::Reject,
        }
    }

    /// Replace the plain edge policy.
    pub fn with_plain_edge_policy(mut self, policy: PlainEdgePolicy) -> Self {
        self.plain_edge_policy = policy;
        self
    }
}
