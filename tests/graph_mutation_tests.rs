use scan_sssp::graph::{DirectedGraph, Edge, Graph, MutableGraph};
use scan_sssp::Error;

#[test]
fn test_remove_edges_drops_every_parallel_edge() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();
    graph.add_vertices(3);
    for cost in [5, 1, 5, 9] {
        graph.add_edge(0, 1, cost, false).unwrap();
    }
    graph.add_edge(0, 2, 4, false).unwrap();
    graph.add_edge(2, 1, 4, false).unwrap();

    assert_eq!(graph.edge_multiplicity(0, 1), 4);
    let before = graph.dijkstra(0).unwrap();
    assert_eq!(before.path_cost(1).unwrap(), Some(1));

    assert_eq!(graph.remove_edges(0, 1).unwrap(), 4);
    assert!(!graph.has_edge(0, 1));
    assert_eq!(graph.edge_count(), 2);

    let after = graph.dijkstra(0).unwrap();
    assert_eq!(after.path_cost(1).unwrap(), Some(8));
    assert_eq!(after.build_path(1).unwrap(), vec![0, 2, 1]);
}

#[test]
fn test_remove_edges_without_match_is_noop() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    graph.add_edge(0, 1, 1, false).unwrap();

    assert_eq!(graph.remove_edges(1, 0).unwrap(), 0);
    // Targets are not validated, only the source vertex
    assert_eq!(graph.remove_edges(0, 42).unwrap(), 0);
    assert_eq!(graph.edge_count(), 1);

    assert!(matches!(graph.remove_edges(2, 0), Err(Error::InvalidVertex(2))));
}

#[test]
fn test_bidirectional_removal_is_one_direction_at_a_time() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    graph.add_edge(0, 1, 3, true).unwrap();
    assert_eq!(graph.edge_count(), 2);

    graph.remove_edges(0, 1).unwrap();
    assert!(!graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
    assert_eq!(graph.dijkstra(1).unwrap().path_cost(0).unwrap(), Some(3));
    assert_eq!(graph.dijkstra(0).unwrap().path_cost(1).unwrap(), None);
}

#[test]
fn test_self_loops_are_stored_and_harmless() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_capacity(2);
    graph.add_edge(0, 0, 2, false).unwrap();
    graph.add_edge(0, 1, 2, false).unwrap();
    graph.add_edge(1, 1, 0, true).unwrap();

    assert_eq!(
        graph.edges(1).unwrap(),
        &[Edge { target: 1, cost: 0 }, Edge { target: 1, cost: 0 }]
    );
    let result = graph.dijkstra(0).unwrap();
    assert_eq!(result.path_cost(0).unwrap(), Some(0));
    assert_eq!(result.build_path(1).unwrap(), vec![0, 1]);
}

#[test]
fn test_min_edge_weight_and_validation() {
    let mut graph: DirectedGraph<i32> = DirectedGraph::with_capacity(3);
    assert_eq!(graph.min_edge_weight(), None);
    assert!(graph.validate_non_negative());

    graph.add_edge(0, 1, 4, false).unwrap();
    graph.add_edge(1, 2, -1, false).unwrap();
    assert_eq!(graph.min_edge_weight(), Some((1, 2, -1)));
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_unknown_vertex_accessors() {
    let graph: DirectedGraph<i64> = DirectedGraph::with_capacity(1);
    assert!(graph.has_vertex(0));
    assert!(!graph.has_vertex(1));
    assert_eq!(graph.outgoing_edges(5).count(), 0);
    assert_eq!(graph.edge_multiplicity(5, 0), 0);
    assert!(matches!(graph.edges(1), Err(Error::InvalidVertex(1))));
}
