//! Breadth-first and depth-first traversals over a [`Graph`].
//!
//! Both traversals are available as lazy iterators ([`Bfs`], [`Dfs`]) and
//! as eager helpers returning the full visit order. Neighbours are explored
//! in edge-list iteration order (most recently added first), so the visit
//! order is a deterministic function of the graph and the start vertex.

use core::iter::FusedIterator;

use crate::error::Result;
use crate::graph::adjacency::Graph;
use crate::graph::queue::VertexQueue;
use crate::graph::visited::VisitedFlags;

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields vertex indices in BFS order.
/// It uses a [`VertexQueue`] sized to the vertex count and fresh visited
/// flags for state management.
pub struct Bfs<'a> {
    graph: &'a Graph,
    visited: VisitedFlags,
    queue: VertexQueue,
}

impl<'a> Bfs<'a> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    ///   if `start` is not a vertex of `graph`.
    /// - [`GraphError::AllocationFailure`](crate::GraphError::AllocationFailure)
    ///   if the scratch buffers cannot be allocated.
    pub fn new(graph: &'a Graph, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = VisitedFlags::new(graph.vertex_count())?;
        let mut queue = VertexQueue::with_capacity(graph.vertex_count())?;

        visited.mark(start);
        queue.enqueue(start)?;

        Ok(Self {
            graph,
            visited,
            queue,
        })
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }
        let u = self.queue.dequeue().ok()?;

        for edge in self.graph.edge_list(u) {
            if self.visited.try_visit(edge.to) {
                let pushed = self.queue.enqueue(edge.to);
                debug_assert!(pushed.is_ok(), "bfs queue smaller than vertex count");
            }
        }

        Some(u)
    }
}

impl FusedIterator for Bfs<'_> {}

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in the preorder a recursive DFS would print them: a
/// vertex, then each unvisited neighbour's subtree in edge-list order.
/// Recursion is replaced by a stack of `(vertex, next edge position)`
/// frames, so deep graphs cannot overflow the call stack.
pub struct Dfs<'a> {
    graph: &'a Graph,
    visited: VisitedFlags,
    stack: Vec<(usize, usize)>,
    start: Option<usize>,
}

impl<'a> Dfs<'a> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Errors
    /// Fails like [`Bfs::new`].
    pub fn new(graph: &'a Graph, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = VisitedFlags::new(graph.vertex_count())?;
        visited.mark(start);

        Ok(Self {
            graph,
            visited,
            stack: vec![(start, 0)],
            start: Some(start),
        })
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }

        loop {
            let top = self.stack.last_mut()?;
            let Some(edge) = self.graph.edge_list(top.0).get(top.1) else {
                // All neighbours explored; backtrack.
                self.stack.pop();
                continue;
            };
            top.1 += 1;

            let v = edge.to;
            if self.visited.try_visit(v) {
                self.stack.push((v, 0));
                return Some(v);
            }
        }
    }
}

impl FusedIterator for Dfs<'_> {}

impl Graph {
    /// Returns a lazy BFS iterator starting from `start`.
    ///
    /// # Errors
    /// See [`Bfs::new`].
    pub fn bfs_iter(&self, start: usize) -> Result<Bfs<'_>> {
        Bfs::new(self, start)
    }

    /// Returns a lazy DFS iterator starting from `start`.
    ///
    /// # Errors
    /// See [`Dfs::new`].
    pub fn dfs_iter(&self, start: usize) -> Result<Dfs<'_>> {
        Dfs::new(self, start)
    }

    /// Runs a breadth-first search from `start` and returns the visit order.
    ///
    /// Vertices unreachable from `start` are not included.
    ///
    /// # Errors
    /// See [`Bfs::new`].
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>> {
        let order: Vec<usize> = self.bfs_iter(start)?.collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(start, visited = order.len(), "bfs complete");
        Ok(order)
    }

    /// Runs a depth-first search from `start` and returns the visit order.
    ///
    /// # Errors
    /// See [`Dfs::new`].
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>> {
        let order: Vec<usize> = self.dfs_iter(start)?.collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(start, visited = order.len(), "dfs complete");
        Ok(order)
    }
}
