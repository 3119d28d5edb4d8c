//! Shortest-path algorithm tests, fixtures from the classic exercises.

use algokit::graph::{paths, WeightedGraph};
use algokit::GraphError;
use rstest::{fixture, rstest};

/// Six-vertex directed graph used by both Dijkstra variants.
#[fixture]
fn dijkstra_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::directed(6);
    for (u, v, w) in [
        (0, 1, 4),
        (0, 2, 4),
        (1, 2, 2),
        (2, 3, 3),
        (2, 4, 1),
        (2, 5, 6),
        (3, 5, 2),
        (4, 5, 3),
    ] {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

#[rstest]
fn given_weighted_graph_when_running_heap_dijkstra_then_distances_match(
    dijkstra_graph: WeightedGraph,
) {
    let distances = paths::dijkstra(&dijkstra_graph, 0).unwrap();
    assert_eq!(
        distances,
        vec![Some(0), Some(4), Some(4), Some(7), Some(5), Some(8)]
    );
}

#[rstest]
fn given_weighted_graph_when_running_sorted_dijkstra_then_variants_agree(
    dijkstra_graph: WeightedGraph,
) {
    assert_eq!(
        paths::dijkstra_sorted(&dijkstra_graph, 0).unwrap(),
        paths::dijkstra(&dijkstra_graph, 0).unwrap()
    );
}

#[test]
fn given_unreachable_vertex_when_running_dijkstra_then_none_reported() {
    let mut graph = WeightedGraph::directed(3);
    graph.add_edge(0, 1, 5).unwrap();
    let distances = paths::dijkstra(&graph, 0).unwrap();
    assert_eq!(distances, vec![Some(0), Some(5), None]);
}

#[test]
fn given_negative_edges_without_cycle_when_running_bellman_ford_then_distances_match() {
    // 0->1(-1), 1->2(-2), 0->2(4): classic fixture, distances 0, -1, -3.
    let mut graph = WeightedGraph::directed(3);
    graph.add_edge(0, 1, -1).unwrap();
    graph.add_edge(1, 2, -2).unwrap();
    graph.add_edge(0, 2, 4).unwrap();

    let distances = paths::bellman_ford(&graph, 0).unwrap();
    assert_eq!(distances, vec![Some(0), Some(-1), Some(-3)]);
}

#[test]
fn given_negative_cycle_when_running_bellman_ford_then_error() {
    let mut graph = WeightedGraph::directed(3);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 2, -3).unwrap();
    graph.add_edge(2, 1, 1).unwrap();

    assert_eq!(
        paths::bellman_ford(&graph, 0),
        Err(GraphError::NegativeCycle(0))
    );
}

#[test]
fn given_negative_cycle_unreachable_from_source_when_running_bellman_ford_then_ok() {
    let mut graph = WeightedGraph::directed(4);
    graph.add_edge(2, 3, -3).unwrap();
    graph.add_edge(3, 2, 1).unwrap();
    graph.add_edge(0, 1, 7).unwrap();

    let distances = paths::bellman_ford(&graph, 0).unwrap();
    assert_eq!(distances[0], Some(0));
    assert_eq!(distances[1], Some(7));
    assert_eq!(distances[2], None);
}

#[test]
fn given_distance_matrix_when_running_floyd_warshall_then_all_pairs_found() {
    // 0->1(5), 0->3(10), 1->2(3), 2->3(1)
    let inf = None;
    let matrix = vec![
        vec![Some(0), Some(5), inf, Some(10)],
        vec![inf, Some(0), Some(3), inf],
        vec![inf, inf, Some(0), Some(1)],
        vec![inf, inf, inf, Some(0)],
    ];

    let dist = paths::floyd_warshall(&matrix);
    // 0 -> 3 improves from 10 to 9 via 1 and 2.
    assert_eq!(dist[0][3], Some(9));
    assert_eq!(dist[0][2], Some(8));
    assert_eq!(dist[1][3], Some(4));
    // No way back against the edge directions.
    assert_eq!(dist[3][0], None);
}

#[test]
fn given_source_out_of_bounds_when_running_paths_then_error() {
    let graph = WeightedGraph::directed(2);
    assert!(matches!(
        paths::dijkstra(&graph, 2),
        Err(GraphError::VertexOutOfBounds { vertex: 2, .. })
    ));
    assert!(paths::bellman_ford(&graph, 5).is_err());
    assert!(paths::dijkstra_sorted(&graph, 3).is_err());
}
