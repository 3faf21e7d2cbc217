//! Console-facing run wiring: banner, live progress, final summary.
mod banner;
mod plan;
mod progress;
mod runner;
mod summary;

pub(crate) use runner::run_local;
