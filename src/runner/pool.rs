use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::AppResult;
use crate::random::RandomSource;
use crate::request::RequestBuilder;
use crate::shutdown::Shutdown;
use crate::stats::StatsAggregator;
use crate::transport::{BodyPolicy, Transport};

use super::config::JitterPolicy;
use super::worker::{WorkerContext, WorkerReport, run_worker};

/// Settings every worker in a pool shares.
#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub builder: Arc<RequestBuilder>,
    pub quota: u64,
    pub body_policy: BodyPolicy,
    pub jitter: JitterPolicy,
}

/// Fixed set of spawned workers, one per random source handed in.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<WorkerReport>>,
}

impl WorkerPool {
    /// Spawns one worker per entry of `sources`. Workers start issuing
    /// immediately and stop at their quota or when `shutdown` closes.
    pub fn spawn<T, R>(
        settings: &WorkerSettings,
        transport: &Arc<T>,
        stats: &Arc<StatsAggregator>,
        shutdown: &Shutdown,
        sources: Vec<R>,
    ) -> Self
    where
        T: Transport,
        R: RandomSource + 'static,
    {
        let mut handles = Vec::with_capacity(sources.len());
        for (worker_id, rng) in sources.into_iter().enumerate() {
            let ctx = WorkerContext {
                worker_id,
                settings: settings.clone(),
                transport: Arc::clone(transport),
                stats: Arc::clone(stats),
                shutdown: shutdown.listener(),
            };
            handles.push(tokio::spawn(run_worker(ctx, rng)));
        }
        Self { handles }
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }

    /// Waits for every worker to return.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker task panicked or was aborted. All
    /// remaining workers are still awaited first.
    pub async fn join(self) -> AppResult<Vec<WorkerReport>> {
        let mut reports = Vec::with_capacity(self.handles.len());
        let mut first_error = None;
        for handle in self.handles {
            match handle.await {
                Ok(report) => reports.push(report),
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(reports),
        }
    }
}
