use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::random::RandomSource;
use crate::shutdown::Shutdown;
use crate::stats::StatsAggregator;
use crate::transport::Transport;

use super::config::RunConfig;
use super::pool::{WorkerPool, WorkerSettings};
use super::report::FinalReport;
use super::reporter::{ProgressSnapshot, ReporterSettings, spawn_reporter};

/// Progress samples buffered per subscriber before the oldest are dropped.
const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// Lifecycle of one run. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunPhase {
    Idle,
    Running,
    Draining,
    Stopped,
}

pub struct Orchestrator<T: Transport> {
    config: RunConfig,
    transport: Arc<T>,
    shutdown: Shutdown,
    progress_tx: broadcast::Sender<ProgressSnapshot>,
    phase_tx: watch::Sender<RunPhase>,
}

impl<T: Transport> Orchestrator<T> {
    #[must_use]
    pub fn new(config: RunConfig, transport: T) -> Self {
        let (progress_tx, _) = broadcast::channel(PROGRESS_CHANNEL_CAPACITY);
        let (phase_tx, _) = watch::channel(RunPhase::Idle);
        Self {
            config,
            transport: Arc::new(transport),
            shutdown: Shutdown::new(),
            progress_tx,
            phase_tx,
        }
    }

    /// Uses an externally owned stop signal, e.g. one wired to Ctrl+C.
    /// Closing it ends the run early; the run still drains and reports.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    #[must_use]
    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Live progress, one sample per report interval.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressSnapshot> {
        self.progress_tx.subscribe()
    }

    #[must_use]
    pub fn phases(&self) -> watch::Receiver<RunPhase> {
        self.phase_tx.subscribe()
    }

    /// Runs to completion: start the pool, wait out the duration (or an
    /// early stop), close the signal, join every worker, report.
    ///
    /// `rng` seeds one independent source per worker.
    ///
    /// # Errors
    ///
    /// Returns an error before any request is issued when the configuration
    /// is invalid or a worker source cannot be derived, and after the run if
    /// a worker task panicked.
    pub async fn run<R>(self, mut rng: R) -> AppResult<FinalReport>
    where
        R: RandomSource + 'static,
    {
        let Self {
            config,
            transport,
            shutdown,
            progress_tx,
            phase_tx,
        } = self;

        config.validate().map_err(AppError::validation)?;

        let mut sources = Vec::with_capacity(config.workers);
        for _ in 0..config.workers {
            sources.push(rng.fork()?);
        }

        let quota = config.per_worker_quota();
        let settings = WorkerSettings {
            builder: Arc::new(config.request_builder()),
            quota,
            body_policy: config.body_policy,
            jitter: config.jitter,
        };
        let stats = Arc::new(StatsAggregator::new());

        info!(
            "Starting {} workers with {} requests each against {}",
            config.workers, quota, config.url
        );
        set_phase(&phase_tx, RunPhase::Running);
        let started_at = Instant::now();
        let pool = WorkerPool::spawn(&settings, &transport, &stats, &shutdown, sources);
        let reporter = spawn_reporter(
            ReporterSettings {
                started_at,
                duration: config.duration,
                interval: config.report_interval,
            },
            Arc::clone(&stats),
            shutdown.listener(),
            progress_tx,
        );

        let deadline = started_at
            .checked_add(config.duration)
            .unwrap_or(started_at);
        let mut listener = shutdown.listener();
        tokio::select! {
            () = tokio::time::sleep_until(deadline) => {
                debug!("Run duration elapsed");
            }
            () = listener.closed() => {
                info!("Stop requested before the deadline");
            }
        }

        if shutdown.close() {
            debug!("Shutdown signal closed");
        }
        set_phase(&phase_tx, RunPhase::Draining);
        info!("Draining {} workers", pool.worker_count());

        let joined = pool.join().await;
        if let Err(err) = reporter.await {
            warn!("Progress reporter ended abnormally: {}", err);
        }
        let elapsed = started_at.elapsed();
        let snapshot = stats.snapshot();
        set_phase(&phase_tx, RunPhase::Stopped);

        let workers = joined?;
        info!(
            "Run stopped after {:?}: total={}, success={}, blocked={}, failed={}, timeouts={}",
            elapsed, snapshot.total, snapshot.success, snapshot.blocked, snapshot.failed,
            snapshot.timeouts
        );
        Ok(FinalReport::new(snapshot, elapsed, quota, workers))
    }
}

fn set_phase(phase_tx: &watch::Sender<RunPhase>, next: RunPhase) {
    phase_tx.send_modify(|phase| *phase = next);
    debug!("Run phase: {:?}", next);
}
