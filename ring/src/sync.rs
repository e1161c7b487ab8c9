#[cfg(not(feature = "loom"))]
pub use std::sync::atomic::{AtomicI64, Ordering};
#[cfg(not(feature = "loom"))]
pub use std::sync::{Mutex, MutexGuard};

#[cfg(feature = "loom")]
pub use loom::sync::atomic::{AtomicI64, Ordering};
#[cfg(feature = "loom")]
pub use loom::sync::{Mutex, MutexGuard};
