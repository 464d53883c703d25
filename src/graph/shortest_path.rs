//! Single-source shortest paths (Dijkstra) over a [`Graph`].
//!
//! Uses the classical O(n²) array formulation: every round scans all
//! vertices for the unvisited one with the smallest finite tentative
//! distance. The scan runs in ascending index order with a non-strict
//! comparison, so among equally distant candidates the one with the
//! highest index is selected. Final distances do not depend on this, but
//! [`ShortestPaths::selection_order`] does.
//!
//! Negative edge weights are accepted but produce unspecified distances.

use core::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::adjacency::Graph;
use crate::graph::visited::VisitedFlags;

/// Distances from one start vertex to every vertex of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    start: usize,
    /// `None` means infinite (unreachable).
    distances: Vec<Option<i64>>,
    selection_order: Vec<usize>,
}

impl ShortestPaths {
    /// Returns the start vertex.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the shortest distance to `vertex`, or `None` if it is
    /// unreachable or not a vertex of the graph.
    #[inline]
    pub fn distance(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns the distance of every vertex, indexed by vertex.
    #[inline]
    pub fn distances(&self) -> &[Option<i64>] {
        &self.distances
    }

    /// Returns `true` if `vertex` is reachable from the start vertex.
    #[inline]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Returns the vertices in the order the algorithm selected them.
    ///
    /// The algorithm runs at most `vertex_count - 1` rounds, so the last
    /// reachable vertex is never selected and does not appear here.
    #[inline]
    pub fn selection_order(&self) -> &[usize] {
        &self.selection_order
    }
}

/// Renders the distance table, `INFINITE` marking unreachable vertices.
impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertex\tDistance from Source")?;
        for (v, dist) in self.distances.iter().enumerate() {
            match dist {
                Some(d) => write!(f, "\n{v}\t\t{d}")?,
                None => write!(f, "\n{v}\t\tINFINITE")?,
            }
        }
        Ok(())
    }
}

/// Finds the unvisited vertex with the minimum finite distance.
///
/// Ties go to the vertex scanned last (`<=`).
fn min_distance(dist: &[Option<i64>], visited: &VisitedFlags) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    for (v, d) in dist.iter().enumerate() {
        let Some(d) = *d else { continue };
        if visited.is_visited(v) {
            continue;
        }
        if best.map_or(true, |(_, min)| d <= min) {
            best = Some((v, d));
        }
    }
    best
}

fn reserve<T: Clone>(len: usize, fill: T, what: &'static str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| GraphError::AllocationFailure { what })?;
    buf.resize(len, fill);
    Ok(buf)
}

impl Graph {
    /// Computes shortest distances from `start` with Dijkstra's algorithm.
    ///
    /// An edge is relaxed only towards unvisited destinations and only when
    /// it strictly improves the tentative distance. Sums that overflow `i64`
    /// never count as an improvement. The search stops early once no
    /// unvisited vertex has a finite distance.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    /// - [`GraphError::AllocationFailure`] if the distance or visited
    ///   buffers cannot be allocated. The graph is never modified.
    pub fn dijkstra(&self, start: usize) -> Result<ShortestPaths> {
        self.check_vertex(start)?;
        let n = self.vertex_count();

        let mut dist = reserve(n, None, "dijkstra distances")?;
        let mut visited = VisitedFlags::new(n)?;
        let mut selection_order = Vec::new();
        selection_order
            .try_reserve_exact(n - 1)
            .map_err(|_| GraphError::AllocationFailure { what: "dijkstra selection order" })?;

        dist[start] = Some(0);

        for _ in 1..n {
            let Some((u, du)) = min_distance(&dist, &visited) else {
                break;
            };
            visited.mark(u);
            selection_order.push(u);

            for edge in self.edge_list(u) {
                if visited.is_visited(edge.to) {
                    continue;
                }
                let Some(candidate) = du.checked_add(edge.weight) else {
                    continue;
                };
                if dist[edge.to].map_or(true, |d| candidate < d) {
                    dist[edge.to] = Some(candidate);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            start,
            reachable = dist.iter().filter(|d| d.is_some()).count(),
            "dijkstra complete"
        );

        Ok(ShortestPaths {
            start,
            distances: dist,
            selection_order,
        })
    }
}
