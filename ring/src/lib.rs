//! # quotaring
//!
//! A bounded, lock-free, multi-producer/multi-consumer ring for handing
//! opaque items between threads under a capacity limit, without a mutex.
//!
//! [`Ring`] pairs an unbounded concurrent queue (by default
//! [`crossbeam_queue::SegQueue`]) with an atomic admission counter:
//!
//! - [`Ring::push`] reserves a permit, enqueues if the reservation is within
//!   capacity, and otherwise gives the permit back and returns the item in
//!   [`RingFull`].
//! - [`Ring::pop`] dequeues and releases one permit per item removed.
//!
//! Nothing blocks. A full ring rejects immediately; retry policy belongs to
//! the caller.
//!
//! ## Sharing a ring
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use quotaring::Ring;
//!
//! let ring = Arc::new(Ring::new(64));
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let ring = ring.clone();
//!         thread::spawn(move || (0..16).filter(|i| ring.push(t * 16 + i).is_ok()).count())
//!     })
//!     .collect();
//! let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
//!
//! assert_eq!(admitted, 64);
//! assert_eq!(ring.occupancy(), 64);
//! ```
//!
//! ## Custom storage
//!
//! Any type implementing [`BackingQueue`] and `Default` can hold the items;
//! [`Ring::with_capacity`] builds a fresh, empty instance for each ring.
//! [`LockedQueue`] is a strictly FIFO alternative used for deterministic
//! tests.
//!
//! ## Model checking
//!
//! With the `loom` feature the counter and [`LockedQueue`] switch to loom
//! primitives:
//!
//! ```text
//! cargo test -p quotaring --features loom --release --lib
//! ```

mod backing;
mod error;
mod ring;
mod sync;

#[cfg(all(test, feature = "loom"))]
mod loom;

pub use backing::{BackingQueue, LockedQueue};
pub use error::RingFull;
pub use ring::Ring;
