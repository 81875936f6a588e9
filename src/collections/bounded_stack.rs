//! A fixed-capacity LIFO stack.

use crate::error::{GraphError, Result};

/// A LIFO stack whose buffer is allocated once at construction.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `with_capacity` | \(O(1)\) | Single fallible reservation |
/// | `push` | \(O(1)\) | Fails instead of reallocating |
/// | `pop` / `peek` | \(O(1)\) | |
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack able to hold `capacity` items.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfMemory`] if the buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, capacity })
    }

    /// Pushes `value` on top of the stack.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when the stack is full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if another `push` would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Maximum number of items the stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every item, keeping the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
