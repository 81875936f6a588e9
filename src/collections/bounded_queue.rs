//! A fixed-capacity FIFO ring buffer.
//!
//! Slots are `Option<T>` so the buffer never holds uninitialized memory; `head`
//! and `len` wrap modulo the capacity.

use crate::error::{GraphError, Result};

/// A FIFO queue over a circular buffer allocated once at construction.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `with_capacity` | \(O(n)\) | Fills the ring with empty slots |
/// | `enqueue` | \(O(1)\) | Fails instead of reallocating |
/// | `dequeue` / `peek` | \(O(1)\) | |
#[derive(Debug)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue able to hold `capacity` items.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfMemory`] if the ring cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            head: 0,
            len: 0,
        })
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the item at the head.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Returns the head item without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.head].as_ref()
        }
    }

    /// Number of items currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if another `enqueue` would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Maximum number of items the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
