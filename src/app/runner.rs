use tracing::{info, warn};

use crate::args::FloodArgs;
use crate::error::AppResult;
use crate::random::SecureRandom;
use crate::runner::{FinalReport, Orchestrator};
use crate::shutdown::Shutdown;
use crate::shutdown_handlers::setup_signal_shutdown_handler;
use crate::transport::HttpTransport;

use super::{banner, plan, progress, summary};

/// Runs one load test against a live target and prints its summary.
///
/// Ctrl+C or SIGTERM ends the run early; workers still drain and the
/// summary still prints.
pub(crate) async fn run_local(args: &FloodArgs) -> AppResult<FinalReport> {
    let config = plan::run_config(args)?;
    let transport = HttpTransport::new(&config.transport)?;
    let rng = SecureRandom::from_os()?;

    banner::print_banner(&config);

    let shutdown = Shutdown::new();
    let signal_handle = setup_signal_shutdown_handler(&shutdown);
    let orchestrator = Orchestrator::new(config, transport).with_shutdown(shutdown.clone());
    let printer = progress::spawn_progress_printer(orchestrator.subscribe(), args.no_color);

    let result = orchestrator.run(rng).await;

    if shutdown.close() {
        info!("Run aborted before any worker started");
    }
    if let Err(err) = signal_handle.await {
        warn!("Signal handler task failed: {}", err);
    }
    if let Err(err) = printer.await {
        warn!("Progress printer task failed: {}", err);
    }

    let report = result?;
    summary::print_summary(&report);
    Ok(report)
}
