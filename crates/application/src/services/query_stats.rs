use std::sync::atomic::{AtomicU64, Ordering};

/// Per-process query counters, updated from the request path.
#[derive(Debug, Default)]
pub struct QueryStats {
    received: AtomicU64,
    dropped: AtomicU64,
    answered: AtomicU64,
    blocked: AtomicU64,
    unsupported: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStatsSnapshot {
    pub received: u64,
    pub dropped: u64,
    pub answered: u64,
    pub blocked: u64,
    pub unsupported: u64,
}

impl QueryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_answered(&self) {
        self.answered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_blocked(&self) {
        self.blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unsupported(&self) {
        self.unsupported.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QueryStatsSnapshot {
        QueryStatsSnapshot {
            received: self.received.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            answered: self.answered.load(Ordering::Relaxed),
            blocked: self.blocked.load(Ordering::Relaxed),
            unsupported: self.unsupported.load(Ordering::Relaxed),
        }
    }
}
