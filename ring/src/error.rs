use std::fmt;

use thiserror::Error;

/// Returned by [`Ring::push`](crate::Ring::push) when the admission counter
/// shows the ring at capacity.
///
/// The rejected item is handed back so the caller can drop it, retry later
/// or route it elsewhere.
#[derive(Error, Clone, Copy, PartialEq, Eq)]
#[error("ring is full")]
pub struct RingFull<T>(pub T);

impl<T> RingFull<T> {
    /// Take back the item that was not admitted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Payloads are opaque to the ring, so `Debug` must not require `T: Debug`.
impl<T> fmt::Debug for RingFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RingFull(..)")
    }
}
