//! Shortest-path algorithms: Dijkstra (two variants), Bellman-Ford,
//! Floyd-Warshall.
//!
//! Absence of a path is `None`; there is no infinity sentinel.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use tracing::instrument;

use crate::errors::{GraphError, GraphResult};
use crate::graph::WeightedGraph;

/// Dijkstra with a binary min-heap and lazy deletion.
///
/// Stale heap entries (distance no longer current) are skipped on pop.
/// Weights must be non-negative; `None` marks unreachable vertices.
#[instrument(level = "debug", skip(graph))]
pub fn dijkstra(graph: &WeightedGraph, source: usize) -> GraphResult<Vec<Option<i64>>> {
    graph.check_vertex(source)?;

    let mut distance: Vec<Option<i64>> = vec![None; graph.vertex_count()];
    let mut heap: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();

    distance[source] = Some(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((dist, vertex))) = heap.pop() {
        if distance[vertex] != Some(dist) {
            continue; // stale entry
        }
        for &(neighbor, weight) in graph.neighbors(vertex) {
            let candidate = dist + weight;
            if distance[neighbor].is_none_or(|d| candidate < d) {
                distance[neighbor] = Some(candidate);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Ok(distance)
}

/// Dijkstra over a sorted set of `(distance, vertex)` pairs.
///
/// The set variant of the exercise: before relaxing a neighbor to a
/// shorter distance, its outdated entry is erased, so every vertex is in
/// the set at most once.
#[instrument(level = "debug", skip(graph))]
pub fn dijkstra_sorted(graph: &WeightedGraph, source: usize) -> GraphResult<Vec<Option<i64>>> {
    graph.check_vertex(source)?;

    let mut distance: Vec<Option<i64>> = vec![None; graph.vertex_count()];
    let mut frontier: BTreeSet<(i64, usize)> = BTreeSet::new();

    distance[source] = Some(0);
    frontier.insert((0, source));

    while let Some(&(dist, vertex)) = frontier.first() {
        frontier.remove(&(dist, vertex));

        for &(neighbor, weight) in graph.neighbors(vertex) {
            let candidate = dist + weight;
            match distance[neighbor] {
                Some(current) if candidate >= current => {}
                previous => {
                    if let Some(current) = previous {
                        frontier.remove(&(current, neighbor));
                    }
                    distance[neighbor] = Some(candidate);
                    frontier.insert((candidate, neighbor));
                }
            }
        }
    }

    Ok(distance)
}

/// Bellman-Ford: V-1 relaxation rounds plus one detection round.
///
/// Handles negative edge weights; a relaxation that still succeeds in the
/// detection round proves a negative cycle reachable from `source`.
#[instrument(level = "debug", skip(graph))]
pub fn bellman_ford(graph: &WeightedGraph, source: usize) -> GraphResult<Vec<Option<i64>>> {
    graph.check_vertex(source)?;

    let n = graph.vertex_count();
    let mut distance: Vec<Option<i64>> = vec![None; n];
    distance[source] = Some(0);

    for _ in 1..n {
        let mut changed = false;
        for (from, to, weight) in graph.edges() {
            if let Some(dist) = distance[from] {
                let candidate = dist + weight;
                if distance[to].is_none_or(|d| candidate < d) {
                    distance[to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    // Detection round: any further improvement means a negative cycle.
    for (from, to, weight) in graph.edges() {
        if let Some(dist) = distance[from] {
            if distance[to].is_none_or(|d| dist + weight < d) {
                return Err(GraphError::NegativeCycle(source));
            }
        }
    }

    Ok(distance)
}

/// Floyd-Warshall all-pairs shortest paths over a distance matrix.
///
/// `matrix[i][j]` is the direct edge weight, `None` when absent. The
/// diagonal is forced to zero. O(V^3).
#[instrument(level = "debug", skip(matrix))]
pub fn floyd_warshall(matrix: &[Vec<Option<i64>>]) -> Vec<Vec<Option<i64>>> {
    let n = matrix.len();
    let mut dist: Vec<Vec<Option<i64>>> = matrix.to_vec();

    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(kj) = dist[k][j] else { continue };
                let through_k = ik + kj;
                if dist[i][j].is_none_or(|d| through_k < d) {
                    dist[i][j] = Some(through_k);
                }
            }
        }
    }

    dist
}
