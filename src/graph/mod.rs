//! Adjacency-list graphs and the classic algorithms over them.

pub mod cycles;
pub mod paths;
pub mod traversal;

use tracing::instrument;

use crate::errors::{GraphError, GraphResult};

/// Unweighted graph over `0..vertex_count` vertices.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    directed: bool,
}

impl Graph {
    pub fn undirected(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: false,
        }
    }

    pub fn directed(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: true,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(to);
        if !self.directed {
            self.adjacency[to].push(from);
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex >= self.adjacency.len() {
            return Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.adjacency.len(),
            });
        }
        Ok(())
    }
}

/// Weighted graph over `0..vertex_count` vertices; weights may be negative.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<(usize, i64)>>,
    directed: bool,
}

impl WeightedGraph {
    pub fn undirected(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: false,
        }
    }

    pub fn directed(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed: true,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push((to, weight));
        if !self.directed {
            self.adjacency[to].push((from, weight));
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, vertex: usize) -> &[(usize, i64)] {
        &self.adjacency[vertex]
    }

    /// Flat edge list, one `(from, to, weight)` per stored adjacency entry.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, row)| row.iter().map(move |&(to, w)| (from, to, w)))
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex >= self.adjacency.len() {
            return Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.adjacency.len(),
            });
        }
        Ok(())
    }
}
