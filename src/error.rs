//! Error types shared by the graph, its queue and the C interface.

use core::fmt;

/// Coarse classification of a [`GraphError`].
///
/// The C interface maps each kind onto a stable status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vertex index or count was outside the accepted range.
    InvalidArgument,
    /// An internal buffer could not be allocated.
    AllocationFailure,
    /// The edge targeted by a removal does not exist.
    NotFound,
    /// A bounded queue was full on enqueue or empty on dequeue.
    CapacityExceeded,
}

/// The error type for graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A graph was requested with a non-positive number of vertices.
    InvalidVertexCount {
        /// The rejected count, as supplied by the caller.
        requested: i64,
    },
    /// A vertex index does not lie in `[0, vertex_count)`.
    VertexOutOfRange {
        /// The rejected index, as supplied by the caller.
        vertex: i64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Reserving an internal buffer failed.
    AllocationFailure {
        /// Which buffer was being reserved.
        what: &'static str,
    },
    /// No edge `src -> dest` exists.
    EdgeNotFound {
        /// Source vertex of the missing edge.
        src: usize,
        /// Destination vertex of the missing edge.
        dest: usize,
    },
    /// The queue's rear cursor already sits on its last slot.
    QueueFull {
        /// Capacity of the queue.
        capacity: usize,
    },
    /// Dequeue on an empty queue.
    QueueEmpty,
}

impl GraphError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVertexCount { .. } | Self::VertexOutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            Self::EdgeNotFound { .. } => ErrorKind::NotFound,
            Self::QueueFull { .. } | Self::QueueEmpty => ErrorKind::CapacityExceeded,
        }
    }

    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertexCount { requested } => {
                write!(f, "number of vertices must be positive (got {requested})")
            }
            Self::VertexOutOfRange { vertex, vertex_count } => write!(
                f,
                "invalid vertex {vertex}: must be between 0 and {}",
                vertex_count.saturating_sub(1)
            ),
            Self::AllocationFailure { what } => write!(f, "memory allocation failed for {what}"),
            Self::EdgeNotFound { src, dest } => write!(f, "edge not found: {src} -> {dest}"),
            Self::QueueFull { capacity } => write!(f, "queue is full (capacity {capacity})"),
            Self::QueueEmpty => f.write_str("queue is empty"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
