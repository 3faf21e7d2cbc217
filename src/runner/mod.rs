//! Worker-pool execution engine.
//!
//! The [`Orchestrator`] owns one run: it partitions the request budget into
//! per-worker quotas, starts the pool and the progress reporter, closes the
//! shared [`Shutdown`](crate::shutdown::Shutdown) at the deadline, and joins
//! every worker before reading the final counters.
mod config;
mod orchestrator;
mod pool;
mod report;
mod reporter;
mod worker;


pub use config::{JitterPolicy, RunConfig};
pub use orchestrator::{Orchestrator, RunPhase};
pub use pool::{WorkerPool, WorkerSettings};
pub use report::{FinalReport, share_x100};
pub use reporter::{ProgressSnapshot, RateTracker};
pub use worker::WorkerReport;
