//! Traversal and cycle-detection tests over small fixed graphs.

use algokit::graph::{cycles, traversal, Graph};
use algokit::util::testing;
use rstest::{fixture, rstest};

/// Undirected graph: 0-1, 0-2, 1-3, 2-4, plus isolated 5.
#[fixture]
fn small_undirected() -> Graph {
    let mut graph = Graph::undirected(6);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 2).unwrap();
    graph.add_edge(1, 3).unwrap();
    graph.add_edge(2, 4).unwrap();
    graph
}

// ============================================================
// BFS / DFS order
// ============================================================

#[rstest]
fn given_small_graph_when_bfs_then_level_order_from_source(small_undirected: Graph) {
    testing::init_test_setup();
    let order = traversal::bfs(&small_undirected, 0).unwrap();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn given_small_graph_when_dfs_then_depth_first_from_source(small_undirected: Graph) {
    let order = traversal::dfs(&small_undirected, 0).unwrap();
    // Matches the recursive neighbor order: 0, 1, 3, then back out to 2, 4.
    assert_eq!(order, vec![0, 1, 3, 2, 4]);
}

#[rstest]
fn given_out_of_bounds_source_when_traversing_then_error(small_undirected: Graph) {
    assert!(traversal::bfs(&small_undirected, 6).is_err());
    assert!(traversal::dfs(&small_undirected, 99).is_err());
}

// ============================================================
// Components and provinces
// ============================================================

#[rstest]
fn given_disconnected_graph_when_listing_components_then_two_found(small_undirected: Graph) {
    let components = traversal::connected_components(&small_undirected);
    assert_eq!(components, vec![vec![0, 1, 2, 3, 4], vec![5]]);
}

#[test]
fn given_adjacency_matrix_when_counting_provinces_then_isolated_city_is_own_province() {
    // 0 and 2 linked, 1 isolated: two provinces.
    let matrix = vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]];
    assert_eq!(traversal::count_provinces(&matrix), 2);
}

#[test]
fn given_empty_matrix_when_counting_provinces_then_zero() {
    assert_eq!(traversal::count_provinces(&[]), 0);
}

// ============================================================
// Cycle detection, three variants
// ============================================================

#[rstest]
fn given_tree_shaped_graph_when_detecting_cycles_then_none_found(small_undirected: Graph) {
    assert!(!cycles::has_cycle_undirected_bfs(&small_undirected));
    assert!(!cycles::has_cycle_undirected_dfs(&small_undirected));
}

#[test]
fn given_triangle_when_detecting_undirected_cycles_then_both_variants_agree() {
    let mut graph = Graph::undirected(4);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 0).unwrap();
    assert!(cycles::has_cycle_undirected_bfs(&graph));
    assert!(cycles::has_cycle_undirected_dfs(&graph));
}

#[test]
fn given_diamond_dag_when_detecting_directed_cycle_then_none_found() {
    // Two paths into vertex 3; revisiting off the path is not a cycle.
    let mut graph = Graph::directed(4);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(0, 2).unwrap();
    graph.add_edge(1, 3).unwrap();
    graph.add_edge(2, 3).unwrap();
    assert!(!cycles::has_cycle_directed(&graph));
}

#[test]
fn given_back_edge_when_detecting_directed_cycle_then_found() {
    let mut graph = Graph::directed(3);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 0).unwrap();
    assert!(cycles::has_cycle_directed(&graph));
}

#[test]
fn given_self_loop_when_detecting_directed_cycle_then_found() {
    let mut graph = Graph::directed(2);
    graph.add_edge(1, 1).unwrap();
    assert!(cycles::has_cycle_directed(&graph));
}
