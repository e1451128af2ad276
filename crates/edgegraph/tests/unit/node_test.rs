//! Unit tests for Node construction, equality and ordering.

use edgegraph::Node;
use std::cmp::Ordering;

#[test]
fn test_node_creation() {
    let node = Node::new(7, "payload".to_string());

    assert_eq!(node.id(), 7);
    assert_eq!(node.data(), "payload");
}

#[test]
fn test_node_equality_needs_id_and_data() {
    let a = Node::new(1, 10);
    let same = Node::new(1, 10);
    let other_data = Node::new(1, 11);
    let other_id = Node::new(2, 10);

    assert_eq!(a, same);
    assert_ne!(a, other_data);
    assert_ne!(a, other_id);
}

#[test]
fn test_node_ordering_ignores_data() {
    let low = Node::new(1, "zzz");
    let high = Node::new(2, "aaa");

    assert!(low < high);
    assert_eq!(low.cmp(&high), Ordering::Less);

    // Same id, different data: ordered as equal without being ==
    let twin = Node::new(1, "other");
    assert_eq!(low.cmp(&twin), Ordering::Equal);
    assert_ne!(low, twin);
}

#[test]
fn test_nodes_sort_by_id() {
    let mut nodes = vec![Node::new(3, 'c'), Node::new(1, 'a'), Node::new(2, 'b')];
    nodes.sort();

    let ids: Vec<_> = nodes.iter().map(Node::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
