use thiserror::Error;

/// Errors for the bounded container types (array stack, circular queue).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContainerError {
    #[error("capacity {0} exhausted")]
    CapacityExceeded(usize),

    #[error("zero capacity is not a valid container size")]
    ZeroCapacity,
}

pub type ContainerResult<T> = Result<T, ContainerError>;

/// Errors raised by graph construction and the shortest-path algorithms.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} out of bounds for graph with {vertex_count} vertices")]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },

    #[error("negative cycle reachable from source {0}")]
    NegativeCycle(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors for positional linked-list operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type ListResult<T> = Result<T, ListError>;
