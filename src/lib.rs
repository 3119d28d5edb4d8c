//! Classic data structures and algorithms, one module per technique family.
//!
//! Each module is self-contained: array partitioning, backtracking,
//! monotonic stack/deque techniques, graph algorithms, linked lists
//! (owned and arena-backed), bounded/unbounded containers, sorting, and
//! binary trees. There is no shared framework binding the families
//! together; the crate is a toolbox, not an engine.

pub mod arrays;
pub mod backtracking;
pub mod errors;
pub mod graph;
pub mod list;
pub mod monotonic;
pub mod queue;
pub mod sorting;
pub mod stack;
pub mod tree;
mod tree_queue;
mod tree_stack;
pub mod util;
pub mod window;

pub use errors::{ContainerError, ContainerResult, GraphError, GraphResult, ListError, ListResult};
