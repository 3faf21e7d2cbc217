//! Core library for the `floodgate` CLI.
//!
//! `floodgate` drives a fixed request rate at one target for a bounded
//! window and reports how many requests succeeded, were rate-limited,
//! failed or timed out. Use it only against systems you operate or are
//! authorized to test.
//!
//! The engine lives in [`runner`]: an [`Orchestrator`](runner::Orchestrator)
//! spreads a request budget over a fixed worker pool, builds each request
//! through [`request::RequestBuilder`], sends it over a [`transport::Transport`]
//! and counts outcomes in a lock-free [`stats::StatsAggregator`].
pub mod args;
pub mod config;
pub mod error;
pub mod random;
pub mod request;
pub mod runner;
pub mod shutdown;
pub mod stats;
pub mod transport;

mod app;
mod entry;
mod logger;
mod shutdown_handlers;

#[cfg(test)]
mod test_support;

/// Parses the command line, runs one load test and prints its summary.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration, a failed client
/// or randomness setup, or a crashed worker.
pub fn run() -> error::AppResult<()> {
    entry::run()
}
