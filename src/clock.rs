//! Time source abstraction so expiry checks are testable.
//! Used by: token, config consumers wiring up a codec.

use std::sync::atomic::{AtomicI64, Ordering::Relaxed};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    /// Current time as whole Unix seconds.
    fn now_unix(&self) -> i64;
}

/// Wall-clock time via `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock pinned to an explicit instant. Clones share the same instant,
/// so a handle kept by the test can move time under a codec that owns
/// another handle.
#[derive(Debug, Clone, Default)]
pub struct FixedClock(Arc<AtomicI64>);

impl FixedClock {
    pub fn at(now_unix: i64) -> Self {
        Self(Arc::new(AtomicI64::new(now_unix)))
    }

    pub fn set(&self, now_unix: i64) {
        self.0.store(now_unix, Relaxed);
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Relaxed);
    }
}

impl Clock for FixedClock {
    fn now_unix(&self) -> i64 {
        self.0.load(Relaxed)
    }
}
