//! C ABI over [`Graph`].
//!
//! A graph is handed out as an opaque pointer from [`adjgraph_create`] and
//! must be released with [`adjgraph_destroy`]. Every other function returns
//! an `i32` status code (`ADJGRAPH_OK` or one of the negative error codes)
//! and writes results into caller-provided buffers.

use core::ptr;
use core::slice;

use crate::error::{ErrorKind, GraphError, Result};
use crate::graph::{checked_vertex_count, Graph};

/// The call succeeded.
pub const ADJGRAPH_OK: i32 = 0;
/// Null graph pointer, non-positive vertex count or out-of-range vertex.
pub const ADJGRAPH_INVALID_ARGUMENT: i32 = -1;
/// An internal buffer could not be allocated.
pub const ADJGRAPH_ALLOCATION_FAILURE: i32 = -2;
/// The edge to remove does not exist.
pub const ADJGRAPH_NOT_FOUND: i32 = -3;
/// The caller's output buffer is too small.
pub const ADJGRAPH_BUFFER_TOO_SMALL: i32 = -4;
/// A bounded queue overflowed or underflowed.
pub const ADJGRAPH_CAPACITY_EXCEEDED: i32 = -5;
/// Distance written by [`adjgraph_dijkstra`] for unreachable vertices.
pub const ADJGRAPH_INFINITE: i64 = i64::MAX;

fn status_code(err: &GraphError) -> i32 {
    match err.kind() {
        ErrorKind::InvalidArgument => ADJGRAPH_INVALID_ARGUMENT,
        ErrorKind::AllocationFailure => ADJGRAPH_ALLOCATION_FAILURE,
        ErrorKind::NotFound => ADJGRAPH_NOT_FOUND,
        ErrorKind::CapacityExceeded => ADJGRAPH_CAPACITY_EXCEEDED,
    }
}

fn to_status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => ADJGRAPH_OK,
        Err(err) => status_code(&err),
    }
}

fn add_edge_checked(graph: &mut Graph, src: i32, dest: i32, weight: i32) -> Result<()> {
    let src = graph.checked_vertex(src.into())?;
    let dest = graph.checked_vertex(dest.into())?;
    graph.add_edge(src, dest, weight.into())
}

fn add_unit_edge_checked(graph: &mut Graph, src: i32, dest: i32) -> Result<()> {
    let src = graph.checked_vertex(src.into())?;
    let dest = graph.checked_vertex(dest.into())?;
    graph.add_unit_edge(src, dest)
}

fn remove_edge_checked(graph: &mut Graph, src: i32, dest: i32) -> Result<()> {
    let src = graph.checked_vertex(src.into())?;
    let dest = graph.checked_vertex(dest.into())?;
    graph.remove_edge(src, dest).map(drop)
}

/// Copies `order` into the caller's buffer, reporting the required length.
///
/// # Safety
/// `out` must be null or valid for `capacity` writes; `out_len` must be
/// null or valid for one write.
unsafe fn write_order(order: &[usize], out: *mut i32, capacity: usize, out_len: *mut usize) -> i32 {
    if let Some(len) = out_len.as_mut() {
        *len = order.len();
    }
    if order.len() > capacity || (out.is_null() && !order.is_empty()) {
        return ADJGRAPH_BUFFER_TOO_SMALL;
    }
    if order.is_empty() {
        return ADJGRAPH_OK;
    }
    let dst = slice::from_raw_parts_mut(out, order.len());
    for (slot, &v) in dst.iter_mut().zip(order) {
        *slot = i32::try_from(v).unwrap_or(i32::MAX);
    }
    ADJGRAPH_OK
}

/// Create a graph with `vertices` vertices and no edges.
///
/// Returns an opaque pointer, or null if `vertices` is not positive or the
/// graph cannot be allocated. Caller must call `adjgraph_destroy` when done.
#[no_mangle]
pub extern "C" fn adjgraph_create(vertices: i32) -> *mut Graph {
    match checked_vertex_count(vertices.into()).and_then(Graph::new) {
        Ok(graph) => Box::into_raw(Box::new(graph)),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("adjgraph_create failed: {_err}");
            ptr::null_mut()
        }
    }
}

/// Destroy a graph, releasing all of its edges. Null is a no-op.
///
/// # Safety
/// `graph` must be null or a pointer returned by [`adjgraph_create`] that
/// has not been destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn adjgraph_destroy(graph: *mut Graph) {
    if !graph.is_null() {
        drop(Box::from_raw(graph));
    }
}

/// Number of vertices, or `-1` for a null graph.
///
/// # Safety
/// `graph` must be null or a live pointer from [`adjgraph_create`].
#[no_mangle]
pub unsafe extern "C" fn adjgraph_vertex_count(graph: *const Graph) -> i32 {
    match graph.as_ref() {
        Some(graph) => i32::try_from(graph.vertex_count()).unwrap_or(i32::MAX),
        None => ADJGRAPH_INVALID_ARGUMENT,
    }
}

/// Add the directed edge `src -> dest` in front of `src`'s edge list.
///
/// # Safety
/// `graph` must be null or a live pointer from [`adjgraph_create`], not
/// aliased by any other call in progress.
#[no_mangle]
pub unsafe extern "C" fn adjgraph_add_edge(graph: *mut Graph, src: i32, dest: i32, weight: i32) -> i32 {
    let Some(graph) = graph.as_mut() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    to_status(add_edge_checked(graph, src, dest, weight))
}

/// Add the directed edge `src -> dest` with the default weight of 1.
///
/// # Safety
/// Same contract as [`adjgraph_add_edge`].
#[no_mangle]
pub unsafe extern "C" fn adjgraph_add_unit_edge(graph: *mut Graph, src: i32, dest: i32) -> i32 {
    let Some(graph) = graph.as_mut() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    to_status(add_unit_edge_checked(graph, src, dest))
}

/// Remove the first edge `src -> dest`.
///
/// Returns `ADJGRAPH_NOT_FOUND` if there is no such edge.
///
/// # Safety
/// Same contract as [`adjgraph_add_edge`].
#[no_mangle]
pub unsafe extern "C" fn adjgraph_remove_edge(graph: *mut Graph, src: i32, dest: i32) -> i32 {
    let Some(graph) = graph.as_mut() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    to_status(remove_edge_checked(graph, src, dest))
}

/// Number of edges leaving `vertex`, or a negative status code.
///
/// # Safety
/// `graph` must be null or a live pointer from [`adjgraph_create`].
#[no_mangle]
pub unsafe extern "C" fn adjgraph_out_degree(graph: *const Graph, vertex: i32) -> i32 {
    let Some(graph) = graph.as_ref() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    match graph.checked_vertex(vertex.into()).and_then(|v| graph.out_degree(v)) {
        Ok(degree) => i32::try_from(degree).unwrap_or(i32::MAX),
        Err(err) => status_code(&err),
    }
}

/// Write the edges leaving `vertex` in iteration order (newest first).
///
/// Destinations go to `out_to` and weights to `out_weight`, both sized for
/// `capacity` entries. `out_len` receives the edge count even when the
/// buffers are too small, so a call with null buffers can size them.
///
/// # Safety
/// `graph` must be null or a live pointer from [`adjgraph_create`];
/// `out_to` and `out_weight` must be null or valid for `capacity` writes;
/// `out_len` must be null or valid for one write.
#[no_mangle]
pub unsafe extern "C" fn adjgraph_edges(
    graph: *const Graph,
    vertex: i32,
    out_to: *mut i32,
    out_weight: *mut i64,
    capacity: usize,
    out_len: *mut usize,
) -> i32 {
    let Some(graph) = graph.as_ref() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    let edges = match graph.checked_vertex(vertex.into()).and_then(|v| graph.edges(v)) {
        Ok(edges) => edges,
        Err(err) => return status_code(&err),
    };
    if let Some(len) = out_len.as_mut() {
        *len = edges.len();
    }
    if edges.is_empty() {
        return ADJGRAPH_OK;
    }
    if edges.len() > capacity || out_to.is_null() || out_weight.is_null() {
        return ADJGRAPH_BUFFER_TOO_SMALL;
    }
    let to = slice::from_raw_parts_mut(out_to, edges.len());
    let weights = slice::from_raw_parts_mut(out_weight, edges.len());
    for ((to, weight), edge) in to.iter_mut().zip(weights.iter_mut()).zip(edges) {
        *to = i32::try_from(edge.to).unwrap_or(i32::MAX);
        *weight = edge.weight;
    }
    ADJGRAPH_OK
}

/// Write the BFS visit order from `start` into `out`.
///
/// `out_len` receives the number of visited vertices even when the buffer
/// is too small, so a call with a null `out` can size the buffer.
///
/// # Safety
/// `graph` must be null or a live pointer from [`adjgraph_create`]; `out`
/// must be null or valid for `capacity` writes; `out_len` must be null or
/// valid for one write.
#[no_mangle]
pub unsafe extern "C" fn adjgraph_bfs(
    graph: *const Graph,
    start: i32,
    out: *mut i32,
    capacity: usize,
    out_len: *mut usize,
) -> i32 {
    let Some(graph) = graph.as_ref() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    match graph.checked_vertex(start.into()).and_then(|s| graph.bfs(s)) {
        Ok(order) => write_order(&order, out, capacity, out_len),
        Err(err) => status_code(&err),
    }
}

/// Write the DFS visit order from `start` into `out`.
///
/// # Safety
/// Same contract as [`adjgraph_bfs`].
#[no_mangle]
pub unsafe extern "C" fn adjgraph_dfs(
    graph: *const Graph,
    start: i32,
    out: *mut i32,
    capacity: usize,
    out_len: *mut usize,
) -> i32 {
    let Some(graph) = graph.as_ref() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    match graph.checked_vertex(start.into()).and_then(|s| graph.dfs(s)) {
        Ok(order) => write_order(&order, out, capacity, out_len),
        Err(err) => status_code(&err),
    }
}

/// Write the shortest distance from `start` to every vertex into `out`.
///
/// `out` must hold at least one slot per vertex. Unreachable vertices get
/// [`ADJGRAPH_INFINITE`].
///
/// # Safety
/// `graph` must be null or a live pointer from [`adjgraph_create`]; `out`
/// must be null or valid for `capacity` writes.
#[no_mangle]
pub unsafe extern "C" fn adjgraph_dijkstra(
    graph: *const Graph,
    start: i32,
    out: *mut i64,
    capacity: usize,
) -> i32 {
    let Some(graph) = graph.as_ref() else {
        return ADJGRAPH_INVALID_ARGUMENT;
    };
    if out.is_null() || capacity < graph.vertex_count() {
        return ADJGRAPH_BUFFER_TOO_SMALL;
    }
    match graph.checked_vertex(start.into()).and_then(|s| graph.dijkstra(s)) {
        Ok(paths) => {
            let dst = slice::from_raw_parts_mut(out, graph.vertex_count());
            for (slot, dist) in dst.iter_mut().zip(paths.distances()) {
                *slot = dist.unwrap_or(ADJGRAPH_INFINITE);
            }
            ADJGRAPH_OK
        }
        Err(err) => status_code(&err),
    }
}
