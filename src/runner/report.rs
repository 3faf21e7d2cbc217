use std::time::Duration;

use crate::stats::StatsSnapshot;

use super::worker::WorkerReport;

/// Final counters of a completed run, read after every worker has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub total: u64,
    pub success: u64,
    pub blocked: u64,
    /// Includes timeouts.
    pub failed: u64,
    pub timeouts: u64,
    pub elapsed: Duration,
    pub per_worker_quota: u64,
    pub workers: Vec<WorkerReport>,
}

impl FinalReport {
    pub(super) const fn new(
        snapshot: StatsSnapshot,
        elapsed: Duration,
        per_worker_quota: u64,
        workers: Vec<WorkerReport>,
    ) -> Self {
        Self {
            total: snapshot.total,
            success: snapshot.success,
            blocked: snapshot.blocked,
            failed: snapshot.failed,
            timeouts: snapshot.timeouts,
            elapsed,
            per_worker_quota,
            workers,
        }
    }

    /// Achieved requests per second, in hundredths.
    #[must_use]
    pub fn actual_rps_x100(&self) -> u64 {
        let elapsed_ms = self.elapsed.as_millis();
        if elapsed_ms == 0 {
            return 0;
        }
        let rps_x100 = u128::from(self.total)
            .saturating_mul(100_000)
            .checked_div(elapsed_ms)
            .unwrap_or(0);
        u64::try_from(rps_x100).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn success_x100(&self) -> u64 {
        share_x100(self.success, self.total)
    }

    #[must_use]
    pub fn blocked_x100(&self) -> u64 {
        share_x100(self.blocked, self.total)
    }

    #[must_use]
    pub fn failed_x100(&self) -> u64 {
        share_x100(self.failed, self.total)
    }

    #[must_use]
    pub fn timeouts_x100(&self) -> u64 {
        share_x100(self.timeouts, self.total)
    }

    /// Sum of requests issued by each worker.
    #[must_use]
    pub fn issued_by_workers(&self) -> u64 {
        self.workers
            .iter()
            .fold(0u64, |acc, worker| acc.saturating_add(worker.issued))
    }
}

/// `part / whole` as a percentage in hundredths (`2550` is 25.50%). Zero
/// when `whole` is zero.
#[must_use]
pub fn share_x100(part: u64, whole: u64) -> u64 {
    let value = u128::from(part)
        .saturating_mul(10_000)
        .checked_div(u128::from(whole))
        .unwrap_or(0);
    u64::try_from(value).unwrap_or(u64::MAX)
}
