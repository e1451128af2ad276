//! Basic usage example for edgegraph
//!
//! This example demonstrates:
//! - Creating nodes and edges of each kind
//! - Building a graph
//! - Deriving the adjacency matrix under both plain edge policies

use edgegraph::{export, DirectedEdge, Edge, Graph, GraphOptions, Node, UndirectedEdge};
use std::rc::Rc;

fn main() -> edgegraph::Result<()> {
    println!("Creating a small graph...\n");

    let lexer = Node::shared(0, "lexer");
    let parser = Node::shared(1, "parser");
    let checker = Node::shared(2, "checker");
    println!("{lexer}");

    let feeds = DirectedEdge::new(0, &lexer, &parser).into_ref();
    let shares_ast = UndirectedEdge::new(1, &parser, &checker).into_ref();
    println!("✓ {feeds}");
    println!("✓ {shares_ast}");

    let mut graph = Graph::with_options(GraphOptions::strict());
    graph.add_edge(Rc::clone(&feeds));
    graph.add_edge(Rc::clone(&shares_ast));

    let adj = graph.adjacency_matrix()?;
    println!("\n{adj}");

    // A plain edge stops derivation
    graph.add_edge(Edge::new(2, &checker, &lexer).into_ref());
    match graph.adjacency_matrix() {
        Ok(_) => println!("unexpected: plain edge accepted"),
        Err(e) => println!("✓ Strict derivation refused: {e}"),
    }
    println!("Compatibility derivation:\n{}", graph.get_adj_matrix());

    println!("{graph}");
    println!("{}", export::export_dot(&graph)?);

    Ok(())
}
