//! Cycle detection in three classic variants.

use std::collections::VecDeque;

use tracing::instrument;

use crate::graph::Graph;

/// Cycle detection in an undirected graph by parent-tracking BFS.
///
/// A visited neighbor that is not the vertex we came from closes a cycle.
/// All components are scanned.
#[instrument(level = "debug", skip(graph))]
pub fn has_cycle_undirected_bfs(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut queue: VecDeque<(usize, Option<usize>)> = VecDeque::new();
        queue.push_back((start, None));

        while let Some((vertex, parent)) = queue.pop_front() {
            for &neighbor in graph.neighbors(vertex) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back((neighbor, Some(vertex)));
                } else if Some(neighbor) != parent {
                    return true;
                }
            }
        }
    }

    false
}

/// Cycle detection in an undirected graph by parent-tracking DFS.
#[instrument(level = "debug", skip(graph))]
pub fn has_cycle_undirected_dfs(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];

    for start in 0..n {
        if !visited[start] && dfs_finds_cycle(graph, start, None, &mut visited) {
            return true;
        }
    }

    false
}

fn dfs_finds_cycle(
    graph: &Graph,
    vertex: usize,
    parent: Option<usize>,
    visited: &mut [bool],
) -> bool {
    visited[vertex] = true;
    for &neighbor in graph.neighbors(vertex) {
        if !visited[neighbor] {
            if dfs_finds_cycle(graph, neighbor, Some(vertex), visited) {
                return true;
            }
        } else if Some(neighbor) != parent {
            return true;
        }
    }
    false
}

/// Cycle detection in a directed graph: DFS with a path-visited mark set.
///
/// An edge to a vertex still on the current recursion path is a back edge,
/// hence a cycle. A vertex that is visited but off the path is fine.
#[instrument(level = "debug", skip(graph))]
pub fn has_cycle_directed(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];

    for start in 0..n {
        if !visited[start] && directed_dfs(graph, start, &mut visited, &mut on_path) {
            return true;
        }
    }

    false
}

fn directed_dfs(graph: &Graph, vertex: usize, visited: &mut [bool], on_path: &mut [bool]) -> bool {
    visited[vertex] = true;
    on_path[vertex] = true;

    for &neighbor in graph.neighbors(vertex) {
        if !visited[neighbor] {
            if directed_dfs(graph, neighbor, visited, on_path) {
                return true;
            }
        } else if on_path[neighbor] {
            return true;
        }
    }

    on_path[vertex] = false;
    false
}
