use super::*;
use crate::config::{CycleCheck, GraphConfig, MissingEndpoint};

fn neighbor_pairs(graph: &Graph, id: &str) -> Vec<(String, f64)> {
    graph
        .neighbors(id)
        .unwrap()
        .iter()
        .map(|n| (n.to.clone(), n.weight.value()))
        .collect()
}

#[test]
fn test_add_vertex() {
    let mut graph = Graph::new();
    graph.add_vertex("A");

    assert!(graph.contains_vertex("A"));
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.neighbors("A").unwrap().is_empty());
}

/// Adding a vertex twice leaves its neighbor list unchanged
#[test]
fn test_add_vertex_idempotent() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", 4.0).unwrap();

    graph.add_vertex("A");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(neighbor_pairs(&graph, "A"), vec![("B".to_string(), 4.0)]);
}

#[test]
fn test_add_edge_appends_exactly_once() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", 4.0).unwrap();

    assert_eq!(neighbor_pairs(&graph, "A"), vec![("B".to_string(), 4.0)]);
    assert!(graph.neighbors("B").unwrap().is_empty());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_self_loop_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex("A");

    let err = graph.add_edge("A", "A", 1.0).unwrap_err();
    assert!(matches!(err, GraphError::SelfLoop(_)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_missing_source_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex("B");

    let err = graph.add_edge("A", "B", 1.0).unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(ref v) if v == "A"));
    assert_eq!(graph.edge_count(), 0);
}

/// Default policy registers an unknown destination as a new vertex, so the
/// edge's endpoint shows up in the vertex list like any other vertex
#[test]
fn test_add_edge_auto_registers_destination() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_edge("A", "B", 2.0).unwrap();

    assert!(graph.contains_vertex("B"));
    assert_eq!(graph.vertex_ids().to_vec(), vec!["A", "B"]);
    assert!(graph.neighbors("B").unwrap().is_empty());
}

#[test]
fn test_add_edge_reject_policy_refuses_unknown_destination() {
    let mut graph = Graph::with_config(GraphConfig {
        missing_endpoint: MissingEndpoint::Reject,
        ..Default::default()
    });
    graph.add_vertex("A");

    let err = graph.add_edge("A", "B", 2.0).unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(ref v) if v == "B"));
    assert!(!graph.contains_vertex("B"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_invalid_weight_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");

    assert!(matches!(
        graph.add_edge("A", "B", -1.0),
        Err(GraphError::InvalidWeight { .. })
    ));
    assert!(matches!(
        graph.add_edge("A", "B", f64::NAN),
        Err(GraphError::InvalidWeight { .. })
    ));
    assert!(matches!(
        graph.add_edge("A", "B", f64::INFINITY),
        Err(GraphError::InvalidWeight { .. })
    ));
    assert_eq!(graph.edge_count(), 0);
}

/// Parallel directed edges are permitted by default
#[test]
fn test_duplicate_edges_allowed_by_default() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.add_edge("A", "B", 7.0).unwrap();

    assert_eq!(graph.neighbors("A").unwrap().len(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_dedup_makes_duplicate_edge_a_no_op() {
    let mut graph = Graph::with_config(GraphConfig {
        dedup_parallel_edges: true,
        ..Default::default()
    });
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.add_edge("A", "B", 7.0).unwrap();

    assert_eq!(neighbor_pairs(&graph, "A"), vec![("B".to_string(), 4.0)]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_undirected_edge() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_undirected_edge("A", "B", 3.0).unwrap();

    assert_eq!(neighbor_pairs(&graph, "A"), vec![("B".to_string(), 3.0)]);
    assert_eq!(neighbor_pairs(&graph, "B"), vec![("A".to_string(), 3.0)]);
    assert_eq!(graph.edge_count(), 2);
}

/// Undirected insertion is all-or-nothing: a missing endpoint leaves both
/// adjacency lists and the edge list untouched
#[test]
fn test_add_undirected_edge_missing_endpoint_no_partial_mutation() {
    let mut graph = Graph::new();
    graph.add_vertex("A");

    let err = graph.add_undirected_edge("A", "B", 3.0).unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(ref v) if v == "B"));
    assert!(graph.neighbors("A").unwrap().is_empty());
    assert!(!graph.contains_vertex("B"));
    assert_eq!(graph.edge_count(), 0);
}

/// After removal, a query of the source's neighbor list must not contain
/// the destination
#[test]
fn test_remove_edge() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.remove_edge("A", "B").unwrap();

    assert!(graph.neighbors("A").unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge_strips_both_orientations() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_undirected_edge("A", "B", 3.0).unwrap();
    graph.remove_edge("A", "B").unwrap();

    assert!(graph.neighbors("A").unwrap().is_empty());
    assert!(graph.neighbors("B").unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge_missing_endpoint_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex("A");

    let err = graph.remove_edge("A", "B").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(ref v) if v == "B"));
}

/// Adding then removing the same edge restores the neighbor list to its
/// pre-insertion state
#[test]
fn test_add_remove_round_trip() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_vertex("C");
    graph.add_edge("A", "C", 2.0).unwrap();

    let before = neighbor_pairs(&graph, "A");
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.remove_edge("A", "B").unwrap();

    assert_eq!(neighbor_pairs(&graph, "A"), before);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_vertex() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_vertex("C");
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("C", "B", 2.0).unwrap();
    graph.add_edge("B", "C", 3.0).unwrap();

    graph.remove_vertex("B").unwrap();

    assert!(!graph.contains_vertex("B"));
    assert_eq!(graph.vertex_ids().to_vec(), vec!["A", "C"]);
    assert!(graph.neighbors("A").unwrap().is_empty());
    assert!(graph.neighbors("C").unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_vertex_unknown_rejected() {
    let mut graph = Graph::new();
    let err = graph.remove_vertex("A").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(_)));
}

#[test]
fn test_with_config_is_used_by_kruskal() {
    let graph = Graph::with_config(GraphConfig {
        cycle_check: CycleCheck::VisitedOnly,
        ..Default::default()
    });
    assert_eq!(graph.config().cycle_check, CycleCheck::VisitedOnly);
}
