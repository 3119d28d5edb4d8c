//! Graph traversal: BFS, DFS, connected components, province counting.

use std::collections::VecDeque;

use tracing::instrument;

use crate::errors::GraphResult;
use crate::graph::Graph;

/// Breadth-first visit order from `source`.
#[instrument(level = "debug", skip(graph))]
pub fn bfs(graph: &Graph, source: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(source)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for &neighbor in graph.neighbors(vertex) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

/// Depth-first visit order from `source`.
///
/// Iterative with an explicit stack; neighbors are pushed in reverse so
/// the order matches the recursive formulation.
#[instrument(level = "debug", skip(graph))]
pub fn dfs(graph: &Graph, source: usize) -> GraphResult<Vec<usize>> {
    graph.check_vertex(source)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![source];

    while let Some(vertex) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        order.push(vertex);
        for &neighbor in graph.neighbors(vertex).iter().rev() {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}

/// Connected components of an undirected graph, each sorted by discovery.
#[instrument(level = "debug", skip(graph))]
pub fn connected_components(graph: &Graph) -> Vec<Vec<usize>> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut components = Vec::new();

    for start in 0..graph.vertex_count() {
        if visited[start] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(vertex) = stack.pop() {
            component.push(vertex);
            for &neighbor in graph.neighbors(vertex) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Number of provinces (connected components) in an adjacency matrix.
///
/// `matrix[i][j] != 0` marks a link between cities `i` and `j`; the
/// diagonal self-links of the classic formulation are tolerated.
#[instrument(level = "debug", skip(matrix))]
pub fn count_provinces(matrix: &[Vec<u8>]) -> usize {
    let n = matrix.len();
    let mut visited = vec![false; n];
    let mut provinces = 0;

    for city in 0..n {
        if visited[city] {
            continue;
        }
        provinces += 1;

        let mut stack = vec![city];
        visited[city] = true;
        while let Some(current) = stack.pop() {
            for neighbor in 0..n {
                if matrix[current][neighbor] != 0 && !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
    }

    provinces
}
