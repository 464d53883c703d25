//! Per-invocation visited flags for graph traversals.
//!
//! Every traversal and shortest-path call allocates its own `VisitedFlags`,
//! so visited state never leaks between calls and `&Graph` is enough to run
//! one.

use crate::error::{GraphError, Result};

/// A dense per-vertex visited flag vector.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    /// Allocates `len` cleared flags.
    pub(crate) fn new(len: usize) -> Result<Self> {
        let mut flags = Vec::new();
        flags
            .try_reserve_exact(len)
            .map_err(|_| GraphError::AllocationFailure { what: "visited flags" })?;
        flags.resize(len, false);
        Ok(Self { flags })
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, idx: usize) {
        self.flags[idx] = true;
    }

    /// Returns `true` iff `idx` was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        !core::mem::replace(&mut self.flags[idx], true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_marks_once() {
        let mut visited = VisitedFlags::new(3).unwrap();
        assert!(visited.try_visit(1));
        assert!(!visited.try_visit(1));
        assert!(visited.is_visited(1));
        assert!(!visited.is_visited(0));

        visited.mark(2);
        assert!(visited.is_visited(2));
        assert!(!visited.try_visit(2));
    }
}
