use std::time::Duration;

use crate::error::ValidationError;
use crate::random::Percent;
use crate::request::{MalformedPolicy, RequestBuilder, RequestToggles};
use crate::transport::{BodyPolicy, TransportConfig};

/// Optional pause after a request in polite mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterPolicy {
    pub percent: Percent,
    pub delay: Duration,
}

impl Default for JitterPolicy {
    fn default() -> Self {
        Self {
            percent: Percent::clamped(5),
            delay: Duration::from_micros(100),
        }
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target requests per second, summed over all workers.
    pub rate: u64,
    pub duration: Duration,
    pub workers: usize,
    pub url: String,
    pub toggles: RequestToggles,
    pub body_policy: BodyPolicy,
    pub malformed: MalformedPolicy,
    pub jitter: JitterPolicy,
    pub report_interval: Duration,
    pub transport: TransportConfig,
}

impl RunConfig {
    #[must_use]
    pub fn new(url: impl Into<String>, rate: u64, duration: Duration, workers: usize) -> Self {
        Self {
            rate,
            duration,
            workers,
            url: url.into(),
            toggles: RequestToggles::all(),
            body_policy: BodyPolicy::Flood,
            malformed: MalformedPolicy::default(),
            jitter: JitterPolicy::default(),
            report_interval: Duration::from_secs(1),
            transport: TransportConfig::default(),
        }
    }

    /// Checks the invariants a run cannot start without.
    ///
    /// # Errors
    ///
    /// Returns an error for zero workers, a zero duration or a zero report
    /// interval.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.workers == 0 {
            return Err(ValidationError::ZeroWorkers);
        }
        if self.duration.is_zero() {
            return Err(ValidationError::ZeroRunDuration);
        }
        if self.report_interval.is_zero() {
            return Err(ValidationError::ZeroReportInterval);
        }
        Ok(())
    }

    /// `rate × duration`, with sub-second durations prorated.
    #[must_use]
    pub fn expected_total(&self) -> u64 {
        let total = u128::from(self.rate)
            .saturating_mul(self.duration.as_millis())
            .checked_div(1000)
            .unwrap_or(0);
        u64::try_from(total).unwrap_or(u64::MAX)
    }

    /// Requests each worker attempts before stopping on its own. Never zero,
    /// so the expected total is a floor rather than an exact count.
    #[must_use]
    pub fn per_worker_quota(&self) -> u64 {
        let workers = u64::try_from(self.workers).unwrap_or(u64::MAX);
        self.expected_total()
            .checked_div(workers)
            .unwrap_or(0)
            .max(1)
    }

    #[must_use]
    pub fn request_builder(&self) -> RequestBuilder {
        RequestBuilder::new(self.url.clone(), self.toggles).with_malformed_policy(self.malformed)
    }
}
