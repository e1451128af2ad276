//! DOT format export for Graphviz visualization.
//!
//! Every edge variant is written into a single `digraph`: directed edges keep
//! their arrow, undirected edges use `dir=none`, and plain edges are drawn
//! dashed without an arrow.

use super::collect_nodes;
use crate::{EdgeKind, Graph, Result};
use std::collections::HashMap;
use std::fmt::Display;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name written after `digraph`
    pub graph_name: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Append each node's data to its label
    pub show_data: bool,
    /// Edge colors by kind (hex color codes)
    pub edge_colors: HashMap<EdgeKind, String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            graph_name: "edge_graph".to_string(),
            rankdir: "LR".to_string(),
            show_data: false,
            edge_colors: HashMap::new(),
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot<T: Display>(graph: &Graph<T>) -> Result<String> {
    export_dot_styled(graph, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled<T: Display>(graph: &Graph<T>, options: DotOptions) -> Result<String> {
    let mut output = String::new();

    // Header
    output.push_str(&format!("digraph {} {{\n", options.graph_name));
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [shape=circle];\n\n");

    for (id, node) in collect_nodes(graph) {
        let label = if options.show_data {
            escape_dot_label(&format!("N{id}\n{}", node.data()))
        } else {
            format!("N{id}")
        };
        output.push_str(&format!("    n{id} [label=\"{label}\"];\n"));
    }

    output.push('\n');

    for edge in graph.edges() {
        let (a, b) = edge.endpoint_ids();
        let style = match edge.kind() {
            EdgeKind::Directed => "",
            EdgeKind::Undirected => ", dir=none",
            EdgeKind::Plain => ", dir=none, style=dashed",
        };
        let color = options
            .edge_colors
            .get(&edge.kind())
            .map(|c| format!(", color=\"{c}\""))
            .unwrap_or_default();

        output.push_str(&format!(
            "    n{a} -> n{b} [label=\"E{}\"{style}{color}];\n",
            edge.id()
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
