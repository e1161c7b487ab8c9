use std::fmt;
use std::marker::PhantomData;

use crossbeam_queue::SegQueue;

use crate::backing::BackingQueue;
use crate::error::RingFull;
use crate::sync::{AtomicI64, Ordering};

/// Bounded, lock-free, multi-producer/multi-consumer holding area.
///
/// Items live in an unbounded backing queue `Q`; a separate atomic
/// occupancy counter gates admission. The counter update and the queue
/// operation are two separate steps, so under contention the counter is a
/// permit count rather than an exact item count:
///
/// - Producers racing at the boundary each bump the counter before checking
///   it. A producer that lands past the limit backs its increment out, but
///   until it does, others may be rejected even though the ring has room.
/// - Between a consumer's dequeue and its decrement, the counter is one
///   higher than the number of items physically stored.
///
/// Once no push or pop is in flight, `occupancy()` equals the number of
/// admitted items not yet popped, and never exceeds `capacity()`.
///
/// ```
/// use quotaring::Ring;
///
/// let ring = Ring::new(2);
/// assert!(ring.push('a').is_ok());
/// assert!(ring.push('b').is_ok());
/// assert_eq!(ring.push('c').unwrap_err().into_inner(), 'c');
/// assert_eq!(ring.pop(), Some('a'));
/// assert!(ring.push('c').is_ok());
/// ```
pub struct Ring<T, Q = SegQueue<T>> {
    queue: Q,
    occupancy: AtomicI64,
    capacity: i64,
    _items: PhantomData<fn(T) -> T>,
}

impl<T> Ring<T> {
    /// Create a ring backed by a fresh lock-free [`SegQueue`].
    ///
    /// A non-positive `capacity` yields a ring that rejects every push.
    pub fn new(capacity: i64) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T, Q: BackingQueue<T> + Default> Ring<T, Q> {
    /// Create a ring over freshly built, empty storage of type `Q`.
    ///
    /// ```
    /// use quotaring::{LockedQueue, Ring};
    ///
    /// let ring = Ring::<u32, LockedQueue<u32>>::with_capacity(4);
    /// assert_eq!(ring.pop(), None);
    /// ```
    pub fn with_capacity(capacity: i64) -> Self {
        if capacity <= 0 {
            tracing::debug!(
                "ring capacity {} is not positive, using 0 (every push is rejected)",
                capacity
            );
        }
        let capacity = capacity.max(0);
        tracing::trace!("created ring with capacity {}", capacity);

        Self {
            queue: Q::default(),
            occupancy: AtomicI64::new(0),
            capacity,
            _items: PhantomData,
        }
    }
}

impl<T, Q: BackingQueue<T>> Ring<T, Q> {
    /// Try to admit `item`.
    ///
    /// Never blocks and never retries. On rejection the occupancy counter is
    /// restored and the item comes back inside the error.
    pub fn push(&self, item: T) -> Result<(), RingFull<T>> {
        let reserved = self.occupancy.fetch_add(1, Ordering::AcqRel);
        if reserved < self.capacity {
            self.queue.enqueue(item);
            Ok(())
        } else {
            self.occupancy.fetch_sub(1, Ordering::AcqRel);
            Err(RingFull(item))
        }
    }

    /// Remove one item if the backing queue has any.
    ///
    /// Every item physically dequeued releases its permit, whatever its
    /// value, so payloads like `Option<U>::None` never leak capacity.
    pub fn pop(&self) -> Option<T> {
        let item = self.queue.dequeue()?;
        self.occupancy.fetch_sub(1, Ordering::AcqRel);
        Some(item)
    }
}

impl<T, Q> Ring<T, Q> {
    /// Effective capacity after normalization. Signed, like
    /// [`occupancy`](Self::occupancy), so the two compare directly.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Current permit count. See the type docs for how it relates to the
    /// number of stored items while operations are in flight.
    pub fn occupancy(&self) -> i64 {
        self.occupancy.load(Ordering::Acquire)
    }

    /// Whether a push issued now would most likely be rejected.
    pub fn is_full(&self) -> bool {
        self.occupancy() >= self.capacity
    }
}

impl<T, Q> fmt::Debug for Ring<T, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("capacity", &self.capacity)
            .field("occupancy", &self.occupancy())
            .finish_non_exhaustive()
    }
}
