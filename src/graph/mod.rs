//! Adjacency-list graph, its bounded vertex queue and the classic
//! traversal and shortest-path algorithms.
//!
//! - `adjacency`: the [`Graph`] itself and its per-vertex [`EdgeList`]s
//! - `queue`: [`VertexQueue`], the bounded FIFO behind BFS
//! - `traversal`: [`Bfs`] and [`Dfs`] iterators
//! - `shortest_path`: Dijkstra and its [`ShortestPaths`] report

pub mod adjacency;
pub mod queue;
pub mod shortest_path;
pub mod traversal;
pub(crate) mod visited;

pub use adjacency::{checked_vertex_count, Edge, EdgeList, Graph, DEFAULT_WEIGHT};
pub use queue::VertexQueue;
pub use shortest_path::ShortestPaths;
pub use traversal::{Bfs, Dfs};
