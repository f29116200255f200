//! Instance identifiers for draggable layers.
//!
//! Ids come from an [`IdCounter`]. The process-wide counter returned by
//! [`IdCounter::global`] starts at 0 and is never torn down; tests and hosts
//! that need isolation create their own counter and hand it to the layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one draggable layer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "truesize-{}", self.0)
    }
}

/// Monotonic id source.
#[derive(Debug, Default)]
pub struct IdCounter {
    next: AtomicU64,
}

static GLOBAL_COUNTER: IdCounter = IdCounter::new();

impl IdCounter {
    /// Create a counter starting at 0.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide counter.
    pub fn global() -> &'static IdCounter {
        &GLOBAL_COUNTER
    }

    /// Hand out the next id.
    pub fn next_id(&self) -> InstanceId {
        InstanceId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> InstanceId {
        InstanceId(self.next.load(Ordering::Relaxed))
    }

    /// Start over from 0.
    ///
    /// Ids handed out before the reset may be issued again, so only reset a
    /// counter whose previous ids are no longer alive.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}
