//! # `adjgraph` - Adjacency-List Graph Toolkit
//!
//! A directed, weighted graph stored as per-vertex adjacency lists, with the
//! classic algorithms built on top of it: breadth-first search backed by a
//! bounded vertex queue, depth-first search, and Dijkstra's shortest paths.
//!
//! ## Guarantees
//!
//! - **Fixed vertex set**: the vertex count is chosen at construction and
//!   every stored edge points at a valid vertex.
//! - **Deterministic order**: new edges are prepended to their source's
//!   list, and every algorithm explores neighbours in that order, so the
//!   same graph and start vertex always produce the same output.
//! - **No shared scratch state**: visited flags, queues and distance
//!   buffers belong to a single call, so traversals only need `&Graph`.
//! - **Errors, not panics**: invalid vertices, non-positive sizes and
//!   failed allocations surface as [`GraphError`] values.
//!
//! ## Surfaces
//!
//! 1. The Rust API in [`graph`].
//! 2. A C ABI in [`ffi`] (the crate also builds as a `cdylib`).
//! 3. The `adjgraph` command driver, built on [`cli`].
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::Graph;
//!
//! let mut graph = Graph::new(5)?;
//! graph.add_edge(0, 1, 4)?;
//! graph.add_edge(0, 2, 1)?;
//! graph.add_edge(2, 1, 2)?;
//! graph.add_edge(1, 3, 1)?;
//! graph.add_edge(2, 3, 5)?;
//!
//! assert_eq!(graph.bfs(0)?, vec![0, 2, 1, 3]);
//!
//! let paths = graph.dijkstra(0)?;
//! assert_eq!(paths.distances(), &[Some(0), Some(3), Some(1), Some(4), None]);
//! # Ok::<(), adjgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod error;
pub mod ffi;
pub mod graph;

pub use error::{ErrorKind, GraphError};
pub use graph::{Bfs, Dfs, Edge, EdgeList, Graph, ShortestPaths, VertexQueue, DEFAULT_WEIGHT};
