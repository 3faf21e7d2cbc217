//! Shared run counters.
//!
//! Workers write, the reporter and final summary read. Each counter is an
//! independent relaxed atomic; a snapshot is not a consistent cut across
//! counters while requests are in flight.
mod outcome;


use std::sync::atomic::{AtomicU64, Ordering};

pub use outcome::Outcome;

#[derive(Debug, Default)]
pub struct StatsAggregator {
    total: AtomicU64,
    success: AtomicU64,
    failed: AtomicU64,
    blocked: AtomicU64,
    timeouts: AtomicU64,
}

impl StatsAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a request as issued. Called once per attempt, before it is sent.
    pub fn record_issued(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts the settled outcome of one issued request.
    ///
    /// A timeout is also a failure.
    pub fn record(&self, outcome: Outcome) {
        match outcome {
            Outcome::Success => {
                self.success.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Blocked => {
                self.blocked.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Failed => {
                self.failed.fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Timeout => {
                self.timeouts.fetch_add(1, Ordering::Relaxed);
                self.failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            success: self.success.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            blocked: self.blocked.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    pub blocked: u64,
    pub timeouts: u64,
}

impl StatsSnapshot {
    /// Requests whose outcome has been recorded.
    #[must_use]
    pub const fn settled(&self) -> u64 {
        self.success
            .saturating_add(self.failed)
            .saturating_add(self.blocked)
    }

    #[must_use]
    pub const fn in_flight(&self) -> u64 {
        self.total.saturating_sub(self.settled())
    }
}
