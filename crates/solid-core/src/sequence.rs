//! Monotonic sequence numbers for journal entries.
//!
//! A generator is an explicit object rather than process-wide state: each
//! journal owns one, or several journals share one through an `Arc` when
//! their numbers must not collide.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out strictly increasing sequence numbers, starting at 1.
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    last: AtomicU64,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator ready to be shared between journals.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Issue the next number.
    pub fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Highest number issued so far, or 0 if none.
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}
