//! JSON format export for D3.js and web visualization tools.
//!
//! [`export_json`] generates "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts; [`export_adjacency_json`] writes a derived
//! adjacency matrix keyed by source node id.

use super::collect_nodes;
use crate::{AdjacencyMatrix, GraphError, Graph, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Export graph to D3.js-compatible JSON format
pub fn export_json<T: Serialize>(graph: &Graph<T>) -> Result<String> {
    let mut nodes_array = Vec::new();
    for (id, node) in collect_nodes(graph) {
        let data = serde_json::to_value(node.data())
            .map_err(|e| GraphError::serialization("Failed to serialize node data", Some(e)))?;
        nodes_array.push(json!({
            "id": id,
            "data": data,
        }));
    }

    let links_array: Vec<Value> = graph
        .edges()
        .map(|edge| {
            let (source, target) = edge.endpoint_ids();
            json!({
                "id": edge.id(),
                "source": source,
                "target": target,
                "kind": edge.kind(),
            })
        })
        .collect();

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    to_pretty(&result)
}

/// Export an adjacency matrix as `{"<source id>": [{"node": id, "edge": id}, ...]}`
pub fn export_adjacency_json<T>(adj: &AdjacencyMatrix<T>) -> Result<String> {
    let mut rows = Map::new();

    for (node, neighbors) in adj.iter() {
        let entries: Vec<Value> = neighbors
            .iter()
            .map(|(to, edge)| json!({ "node": to.id(), "edge": edge.id() }))
            .collect();
        rows.insert(node.id().to_string(), Value::Array(entries));
    }

    to_pretty(&Value::Object(rows))
}

fn to_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GraphError::serialization("Failed to serialize JSON", Some(e)))
}
