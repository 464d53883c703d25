//! Bounded FIFO of vertex indices used by BFS.
//!
//! The queue is linear rather than a ring: the rear cursor only moves
//! forward, and both cursors return to the empty state once the last item
//! has been drained. BFS enqueues each vertex at most once, so a queue
//! sized to the vertex count never fills up during a traversal.
//!
//! Performance Characteristics:
//! - Enqueue/Dequeue: O(1)
//! - Memory: one `usize` slot per unit of capacity, allocated up front

use crate::error::{GraphError, Result};

/// A fixed-capacity queue of vertex indices with front/rear cursors.
#[derive(Debug, Clone)]
pub struct VertexQueue {
    items: Box<[usize]>,
    /// `(front, rear)`, both inclusive. `None` is the empty state.
    cursors: Option<(usize, usize)>,
}

impl VertexQueue {
    /// Creates an empty queue that can hold `capacity` items.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailure`] if `capacity` is zero or the
    /// item buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GraphError::AllocationFailure { what: "queue items" });
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| GraphError::AllocationFailure { what: "queue items" })?;
        items.resize(capacity, 0);

        Ok(Self {
            items: items.into_boxed_slice(),
            cursors: None,
        })
    }

    /// Returns the maximum number of items the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of items currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        match self.cursors {
            Some((front, rear)) => rear - front + 1,
            None => 0,
        }
    }

    /// Returns `true` if no items are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_none()
    }

    /// Returns `true` if the rear cursor has reached the last slot.
    ///
    /// Dequeuing does not make room again until the queue drains completely.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self.cursors, Some((_, rear)) if rear + 1 == self.capacity())
    }

    /// Appends `item` at the rear.
    ///
    /// # Errors
    /// Returns [`GraphError::QueueFull`] if the queue is full. The queue is
    /// left unchanged.
    pub fn enqueue(&mut self, item: usize) -> Result<()> {
        if self.is_full() {
            let err = GraphError::QueueFull {
                capacity: self.capacity(),
            };
            #[cfg(feature = "tracing")]
            tracing::warn!(item, "{err}");
            return Err(err);
        }

        let (front, rear) = match self.cursors {
            Some((front, rear)) => (front, rear + 1),
            None => (0, 0),
        };
        self.items[rear] = item;
        self.cursors = Some((front, rear));
        Ok(())
    }

    /// Removes and returns the item at the front.
    ///
    /// # Errors
    /// Returns [`GraphError::QueueEmpty`] if there is nothing to dequeue.
    pub fn dequeue(&mut self) -> Result<usize> {
        let Some((front, rear)) = self.cursors else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", GraphError::QueueEmpty);
            return Err(GraphError::QueueEmpty);
        };

        let item = self.items[front];
        self.cursors = if front == rear {
            None
        } else {
            Some((front + 1, rear))
        };
        Ok(item)
    }
}
