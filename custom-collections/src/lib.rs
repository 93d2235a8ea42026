//! # Custom Collections
//!
//! Generic, in-memory data structures with value-equality semantics: a growable
//! ring-buffer queue and an insertion-ordered set with set algebra.
//!
//! ## Features
//!
//! ### Generic Collections
//!
//! - **[`RingQueue<T>`]** – FIFO queue over a circular array that doubles when full
//! - **[`ValueSet<T>`]** – deduplicated, insertion-ordered set with union, intersection,
//!   difference, symmetric difference and subset tests
//! - **[`Collection<T>`]** – trait abstraction over `add`, `remove`, `contains`, `len` & copy-out
//!
//! ### Utility Macros
//!
//! - **[`ring_queue!`]** – build a queue from a literal list of elements
//! - **[`value_set!`]** – build a set from a literal list, dropping repeats
//!
//! ## Errors
//!
//! Fallible operations return [`CollectionError`]. Every variant signals a caller
//! contract violation (negative capacity, missing argument, empty queue, misused
//! cursor) and is never retried internally.
//!
//! ## Threading
//!
//! The collections are plain single-owner values with no internal locking.
//! Cloning always deep-copies the backing storage.
//!
//! ## Quick Examples
//!
//! ### Using RingQueue
//!
//! ```rust
//! use custom_collections::generic::ring_queue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(2);
//! queue.enqueue(10);
//! queue.enqueue(20);
//! queue.enqueue(30); // storage doubles to 4 slots
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.dequeue(), Ok(10));
//! assert_eq!(queue.peek(), Ok(&20));
//! ```
//!
//! ### Using ValueSet
//!
//! ```rust
//! use custom_collections::generic::value_set::ValueSet;
//!
//! let a: ValueSet<_> = [1, 2, 3].into_iter().collect();
//! let b: ValueSet<_> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(a.symmetric_difference(Some(&b)).as_slice(), &[1, 4]);
//! assert!(a.intersection(Some(&b)).is_subset(Some(&a)));
//!
//! // An empty difference is reported as `None`.
//! assert!(a.difference(Some(&a)).is_none());
//! ```
//!
//! ### Using the literal macros
//!
//! ```rust
//! use custom_collections::{ring_queue, value_set};
//!
//! let queue = ring_queue![2, 4, 245];
//! let set = value_set![2, 2, 4];
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(set.len(), 2);
//! ```
//!
//! [`RingQueue<T>`]: generic::ring_queue::RingQueue
//! [`ValueSet<T>`]: generic::value_set::ValueSet
//! [`Collection<T>`]: generic::collection::Collection
//! [`ring_queue!`]: macro@ring_queue
//! [`value_set!`]: macro@value_set

pub mod error;
pub mod generic;
pub mod macros;

pub use error::{CollectionError, Result};
