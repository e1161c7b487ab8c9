//! Storage behind a [`Ring`](crate::Ring).
//!
//! The ring only needs two operations from its storage: put an item in, and
//! take one item out if any is present. Both must be safe to call from any
//! number of threads at once. Capacity accounting lives in the ring, so
//! implementations are unbounded.

use std::collections::VecDeque;

use crossbeam_queue::SegQueue;

use crate::sync::{Mutex, MutexGuard};

/// Unbounded, thread-safe, FIFO-ish container used as ring storage.
pub trait BackingQueue<T> {
    /// Insert an item. It must become visible to later `dequeue` calls.
    fn enqueue(&self, item: T);

    /// Claim and remove one item, or return `None` if the queue is empty.
    /// Must not block waiting for an item.
    fn dequeue(&self) -> Option<T>;
}

impl<T> BackingQueue<T> for SegQueue<T> {
    #[inline]
    fn enqueue(&self, item: T) {
        self.push(item);
    }

    #[inline]
    fn dequeue(&self) -> Option<T> {
        self.pop()
    }
}

/// Mutex-protected FIFO queue.
///
/// Strictly ordered and loom-aware, which makes it the storage of choice for
/// deterministic tests and model checking. It takes a lock on every call, so
/// prefer the default [`SegQueue`] storage anywhere throughput matters.
pub struct LockedQueue<T> {
    inner: Mutex<VecDeque<T>>,
}

impl<T> LockedQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    /// Number of items physically resident. Only exact when quiescent.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> Default for LockedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BackingQueue<T> for LockedQueue<T> {
    fn enqueue(&self, item: T) {
        self.lock().push_back(item);
    }

    fn dequeue(&self) -> Option<T> {
        self.lock().pop_front()
    }
}
