use std::sync::Arc;

use tracing::debug;

use crate::random::RandomSource;
use crate::request::RequestSpec;
use crate::shutdown::ShutdownListener;
use crate::stats::{Outcome, StatsAggregator};
use crate::transport::{BodyPolicy, Transport, settle};

use super::pool::WorkerSettings;

/// What one worker did before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub issued: u64,
    /// The worker stopped on the shutdown signal before its quota ran out.
    pub cancelled: bool,
}

pub(super) struct WorkerContext<T: Transport> {
    pub(super) worker_id: usize,
    pub(super) settings: WorkerSettings,
    pub(super) transport: Arc<T>,
    pub(super) stats: Arc<StatsAggregator>,
    pub(super) shutdown: ShutdownListener,
}

pub(super) async fn run_worker<T, R>(ctx: WorkerContext<T>, mut rng: R) -> WorkerReport
where
    T: Transport,
    R: RandomSource,
{
    let WorkerContext {
        worker_id,
        settings,
        transport,
        stats,
        shutdown,
    } = ctx;

    let mut issued: u64 = 0;
    let mut cancelled = false;
    while issued < settings.quota {
        if shutdown.is_closed() {
            cancelled = true;
            break;
        }

        stats.record_issued();
        issued = issued.saturating_add(1);

        let outcome = match settings.builder.build(&mut rng) {
            Ok(request) => execute(transport.as_ref(), request, settings.body_policy).await,
            Err(err) => {
                debug!("Worker {} could not build request: {}", worker_id, err);
                Outcome::Failed
            }
        };
        stats.record(outcome);

        if settings.body_policy == BodyPolicy::Polite && rng.chance(settings.jitter.percent) {
            tokio::time::sleep(settings.jitter.delay).await;
        }

        // Requests rejected before the network never suspend; without this a
        // worker can starve the deadline timer.
        tokio::task::yield_now().await;
    }

    debug!(
        "Worker {} finished: issued={}, cancelled={}",
        worker_id, issued, cancelled
    );
    WorkerReport {
        worker_id,
        issued,
        cancelled,
    }
}

async fn execute<T: Transport>(transport: &T, request: RequestSpec, policy: BodyPolicy) -> Outcome {
    match transport.send(request).await {
        Ok(response) => Outcome::from_status(settle(response, policy).await),
        Err(err) => {
            debug!("Request failed: {}", err);
            Outcome::from_error(&err)
        }
    }
}
