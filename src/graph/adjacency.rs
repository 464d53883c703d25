//! A fixed-size, directed, weighted adjacency-list graph.
//!
//! Each vertex owns an [`EdgeList`] of `(destination, weight)` entries.
//! New edges are *prepended*: the most recently added edge of a vertex is
//! the first one yielded by [`Graph::edges`], and therefore the first one
//! explored by BFS, DFS and Dijkstra. Traversal tie-breaks depend on this
//! order, so it is part of the observable contract.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `new` | \(O(n)\) | Allocates one empty list per vertex |
//! | `add_edge` | \(O(1)\) amortized | Pushes onto the list's tail, iterated in reverse |
//! | `remove_edge` | \(O(\text{out-degree})\) | Linear scan, order-preserving removal |
//! | `out_degree` | \(O(1)\) | |
//! | `edge_count` | \(O(n)\) | Sums list lengths |

use core::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Weight used by caller-facing layers when none is supplied.
pub const DEFAULT_WEIGHT: i64 = 1;

/// Validates a caller-supplied signed vertex count.
///
/// # Errors
/// Returns [`GraphError::InvalidVertexCount`] unless `raw` is positive.
pub fn checked_vertex_count(raw: i64) -> Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(GraphError::InvalidVertexCount { requested: raw })
}

/// A directed edge entry stored in its source vertex's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Destination vertex.
    pub to: usize,
    /// Edge weight. Dijkstra assumes it is non-negative.
    pub weight: i64,
}

/// The outgoing edges of one vertex.
///
/// Stored oldest-first and iterated newest-first, which gives prepend
/// semantics with amortized O(1) insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Returns the number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the vertex has no outgoing edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates entries most-recently-added first.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Edge> + ExactSizeIterator + '_ {
        self.edges.iter().rev()
    }

    /// Returns the entry at `pos` in iteration order.
    #[inline]
    pub(crate) fn get(&self, pos: usize) -> Option<&Edge> {
        let len = self.edges.len();
        if pos < len {
            self.edges.get(len - 1 - pos)
        } else {
            None
        }
    }

    fn prepend(&mut self, edge: Edge) -> Result<()> {
        self.edges
            .try_reserve(1)
            .map_err(|_| GraphError::AllocationFailure { what: "edge entry" })?;
        self.edges.push(edge);
        Ok(())
    }

    /// Removes the first entry, in iteration order, pointing at `to`.
    fn remove_first(&mut self, to: usize) -> Option<Edge> {
        let idx = self.edges.iter().rposition(|e| e.to == to)?;
        Some(self.edges.remove(idx))
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = core::iter::Rev<core::slice::Iter<'a, Edge>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter().rev()
    }
}

/// A directed, weighted graph over vertices `0..vertex_count`.
///
/// The vertex count is fixed at construction. Every edge destination is
/// guaranteed to be a valid vertex index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<EdgeList>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertexCount`] if `vertex_count` is zero.
    /// - [`GraphError::AllocationFailure`] if the adjacency lists cannot be
    ///   reserved.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { requested: 0 });
        }
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::AllocationFailure { what: "adjacency lists" })?;
        adjacency.resize_with(vertex_count, EdgeList::default);

        #[cfg(feature = "tracing")]
        tracing::debug!(vertex_count, "graph created");
        Ok(Self { adjacency })
    }

    /// Creates a graph and applies [`Graph::add_edge`] for every
    /// `(src, dest, weight)` triple, in order.
    ///
    /// # Errors
    /// Fails like [`Graph::new`] and [`Graph::add_edge`].
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (src, dest, weight) in edges {
            graph.add_edge(src, dest, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edge entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(EdgeList::len).sum()
    }

    /// Validates a caller-supplied signed vertex index.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] unless `raw` lies in
    /// `[0, vertex_count)`.
    pub fn checked_vertex(&self, raw: i64) -> Result<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&v| v < self.vertex_count())
            .ok_or(GraphError::VertexOutOfRange {
                vertex: raw,
                vertex_count: self.vertex_count(),
            })
    }

    #[inline]
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    /// Adds the directed edge `src -> dest` in front of `src`'s list.
    ///
    /// Duplicate edges are kept.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    /// - [`GraphError::AllocationFailure`] if the entry cannot be stored.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: i64) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;
        self.adjacency[src].prepend(Edge { to: dest, weight })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(src, dest, weight, "edge added");
        Ok(())
    }

    /// Adds `src -> dest` with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    /// Fails like [`Graph::add_edge`].
    pub fn add_unit_edge(&mut self, src: usize, dest: usize) -> Result<()> {
        self.add_edge(src, dest, DEFAULT_WEIGHT)
    }

    /// Adds both `a -> b` and `b -> a` with the same weight.
    ///
    /// Either both entries are added or neither is.
    ///
    /// # Errors
    /// Fails like [`Graph::add_edge`].
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: i64) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.add_edge(a, b, weight)?;
        if let Err(err) = self.add_edge(b, a, weight) {
            self.adjacency[a].remove_first(b);
            return Err(err);
        }
        Ok(())
    }

    /// Removes the first edge `src -> dest` in iteration order and returns it.
    ///
    /// Matching is by destination only; the remaining entries keep their
    /// order.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    /// - [`GraphError::EdgeNotFound`] if no such edge exists. The graph is
    ///   unchanged and the caller may carry on.
    pub fn remove_edge(&mut self, src: usize, dest: usize) -> Result<Edge> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;
        match self.adjacency[src].remove_first(dest) {
            Some(edge) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(src, dest, "edge removed");
                Ok(edge)
            }
            None => {
                let err = GraphError::EdgeNotFound { src, dest };
                #[cfg(feature = "tracing")]
                tracing::warn!("{err}");
                Err(err)
            }
        }
    }

    /// Returns the outgoing edges of `vertex`, most-recently-added first.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an invalid vertex.
    pub fn edges(&self, vertex: usize) -> Result<&EdgeList> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Returns the destinations of `vertex`'s outgoing edges in iteration
    /// order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an invalid vertex.
    pub fn neighbors(&self, vertex: usize) -> Result<impl Iterator<Item = usize> + '_> {
        Ok(self.edges(vertex)?.iter().map(|e| e.to))
    }

    /// Returns the number of outgoing edge entries of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an invalid vertex.
    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.edges(vertex)?.len())
    }

    /// Checks whether at least one edge `src -> dest` exists.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    pub fn has_edge(&self, src: usize, dest: usize) -> Result<bool> {
        self.check_vertex(dest)?;
        Ok(self.edges(src)?.iter().any(|e| e.to == dest))
    }

    /// Unchecked list access for algorithms that validated `vertex` already.
    #[inline]
    pub(crate) fn edge_list(&self, vertex: usize) -> &EdgeList {
        &self.adjacency[vertex]
    }
}

/// Renders the adjacency dump, one line per vertex:
///
/// ```text
/// Vertex 0: -> 2(w:1) -> 1(w:4)
/// Vertex 1: No connections
/// ```
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in self.adjacency.iter().enumerate() {
            if v > 0 {
                writeln!(f)?;
            }
            write_vertex_line(f, v, list)?;
        }
        Ok(())
    }
}

/// Writes one adjacency dump line, without a trailing newline.
pub(crate) fn write_vertex_line<'e>(
    f: &mut impl fmt::Write,
    vertex: usize,
    edges: impl IntoIterator<Item = &'e Edge>,
) -> fmt::Result {
    write!(f, "Vertex {vertex}:")?;
    let mut any = false;
    for edge in edges {
        any = true;
        write!(f, " -> {}(w:{})", edge.to, edge.weight)?;
    }
    if !any {
        f.write_str(" No connections")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dests(graph: &Graph, v: usize) -> Vec<usize> {
        graph.neighbors(v).unwrap().collect()
    }

    #[test]
    fn graph_construction() {
        let graph = Graph::new(4).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        for v in 0..4 {
            assert!(graph.edges(v).unwrap().is_empty());
        }

        assert_eq!(
            Graph::new(0).unwrap_err(),
            GraphError::InvalidVertexCount { requested: 0 }
        );
    }

    #[test]
    fn add_edge_prepends() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(0, 3, 7).unwrap();

        assert_eq!(dests(&graph, 0), vec![3, 2, 1]);
        assert_eq!(graph.edges(0).unwrap().get(0), Some(&Edge { to: 3, weight: 7 }));
        assert_eq!(graph.edges(0).unwrap().get(2), Some(&Edge { to: 1, weight: 4 }));
        assert_eq!(graph.edges(0).unwrap().get(3), None);
        assert_eq!(graph.out_degree(0), Ok(3));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn add_edge_rejects_out_of_range() {
        let mut graph = Graph::new(2).unwrap();
        assert_eq!(
            graph.add_edge(0, 2, 1),
            Err(GraphError::VertexOutOfRange { vertex: 2, vertex_count: 2 })
        );
        assert_eq!(
            graph.add_edge(5, 0, 1),
            Err(GraphError::VertexOutOfRange { vertex: 5, vertex_count: 2 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 1, 9).unwrap();
        assert_eq!(graph.out_degree(0), Ok(2));

        // Removes the newest duplicate first.
        assert_eq!(graph.remove_edge(0, 1), Ok(Edge { to: 1, weight: 9 }));
        assert_eq!(graph.remove_edge(0, 1), Ok(Edge { to: 1, weight: 1 }));
        assert_eq!(graph.remove_edge(0, 1), Err(GraphError::EdgeNotFound { src: 0, dest: 1 }));
    }

    #[test]
    fn remove_edge_preserves_order() {
        let mut graph = Graph::new(5).unwrap();
        for dest in 1..5 {
            graph.add_edge(0, dest, 1).unwrap();
        }
        assert_eq!(dests(&graph, 0), vec![4, 3, 2, 1]);

        graph.remove_edge(0, 3).unwrap();
        assert_eq!(dests(&graph, 0), vec![4, 2, 1]);
        assert!(!graph.has_edge(0, 3).unwrap());
        assert!(graph.has_edge(0, 2).unwrap());
    }

    #[test]
    fn add_then_remove_restores_list() {
        let mut graph = Graph::from_edges(3, [(0, 1, 2), (0, 2, 3), (1, 2, 1)]).unwrap();
        let before = graph.clone();

        graph.add_edge(0, 1, 8).unwrap();
        graph.remove_edge(0, 1).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn undirected_edge_adds_both_directions() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_undirected_edge(0, 2, 5).unwrap();
        assert!(graph.has_edge(0, 2).unwrap());
        assert!(graph.has_edge(2, 0).unwrap());
        assert_eq!(graph.edge_count(), 2);

        assert!(graph.add_undirected_edge(0, 3, 1).is_err());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn checked_vertex_count_requires_positive() {
        assert_eq!(checked_vertex_count(5), Ok(5));
        assert_eq!(
            checked_vertex_count(0),
            Err(GraphError::InvalidVertexCount { requested: 0 })
        );
        assert_eq!(
            checked_vertex_count(-3),
            Err(GraphError::InvalidVertexCount { requested: -3 })
        );
    }

    #[test]
    fn checked_vertex_accepts_only_valid_indices() {
        let graph = Graph::new(3).unwrap();
        assert_eq!(graph.checked_vertex(2), Ok(2));
        assert_eq!(
            graph.checked_vertex(-1),
            Err(GraphError::VertexOutOfRange { vertex: -1, vertex_count: 3 })
        );
        assert!(graph.checked_vertex(3).is_err());
    }

    #[test]
    fn display_dumps_adjacency() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(2, 1, 2).unwrap();

        assert_eq!(
            graph.to_string(),
            "Vertex 0: -> 2(w:1) -> 1(w:4)\nVertex 1: No connections\nVertex 2: -> 1(w:2)"
        );
    }
}
