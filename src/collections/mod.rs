//! Fixed-capacity worklists consumed by the graph traversals.
//!
//! - `BoundedStack`: LIFO over a preallocated buffer (depth-first worklist)
//! - `BoundedQueue`: FIFO ring buffer (breadth-first worklist)
//!
//! Both allocate their whole buffer up front and report exhaustion as
//! [`GraphError::CapacityExceeded`](crate::GraphError::CapacityExceeded) instead of growing.

pub mod bounded_queue;
pub mod bounded_stack;

pub use bounded_queue::BoundedQueue;
pub use bounded_stack::BoundedStack;
