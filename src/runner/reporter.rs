use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::shutdown::ShutdownListener;
use crate::stats::{StatsAggregator, StatsSnapshot};

/// One live progress sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub elapsed_secs: u64,
    pub total: u64,
    /// Requests issued since the previous sample.
    pub delta: u64,
    /// `delta` scaled to one second.
    pub rps: u64,
    pub success: u64,
    pub failed: u64,
    pub blocked: u64,
    pub timeouts: u64,
}

/// Derives the per-tick request delta from successive totals.
#[derive(Debug, Default)]
pub struct RateTracker {
    last_total: u64,
}

impl RateTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_total: 0 }
    }

    /// Returns the increase since the last observation. Totals never go
    /// backwards, so a smaller value yields zero.
    pub fn observe(&mut self, total: u64) -> u64 {
        let delta = total.saturating_sub(self.last_total);
        self.last_total = self.last_total.max(total);
        delta
    }
}

pub(super) struct ReporterSettings {
    pub(super) started_at: Instant,
    pub(super) duration: Duration,
    pub(super) interval: Duration,
}

/// Samples `stats` every interval until the signal closes or the elapsed
/// whole seconds pass the run duration. Samples nobody receives are dropped.
pub(super) fn spawn_reporter(
    settings: ReporterSettings,
    stats: Arc<StatsAggregator>,
    mut shutdown: ShutdownListener,
    progress_tx: broadcast::Sender<ProgressSnapshot>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let ReporterSettings {
            started_at,
            duration,
            interval,
        } = settings;
        let first_tick = started_at.checked_add(interval).unwrap_or(started_at);
        let mut ticker = tokio::time::interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tracker = RateTracker::new();
        let duration_secs = duration.as_secs();

        loop {
            tokio::select! {
                () = shutdown.closed() => break,
                _ = ticker.tick() => {
                    let elapsed_secs = started_at.elapsed().as_secs();
                    if elapsed_secs > duration_secs {
                        break;
                    }
                    let snapshot = stats.snapshot();
                    let delta = tracker.observe(snapshot.total);
                    let sample = progress_sample(elapsed_secs, delta, interval, snapshot);
                    // No subscribers is fine; keep sampling in case one attaches.
                    drop(progress_tx.send(sample));
                }
            }
        }
        debug!("Progress reporter stopped");
    })
}

pub(super) fn progress_sample(
    elapsed_secs: u64,
    delta: u64,
    interval: Duration,
    snapshot: StatsSnapshot,
) -> ProgressSnapshot {
    let interval_ms = interval.as_millis().max(1);
    let rps = u128::from(delta)
        .saturating_mul(1000)
        .checked_div(interval_ms)
        .unwrap_or(0);
    ProgressSnapshot {
        elapsed_secs,
        total: snapshot.total,
        delta,
        rps: u64::try_from(rps).unwrap_or(u64::MAX),
        success: snapshot.success,
        failed: snapshot.failed,
        blocked: snapshot.blocked,
        timeouts: snapshot.timeouts,
    }
}
