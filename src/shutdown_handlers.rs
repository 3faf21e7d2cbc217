use tracing::info;

use crate::shutdown::Shutdown;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Closes `shutdown` on Ctrl+C or SIGTERM. Exits quietly once the signal
/// is closed by anything else.
pub fn setup_signal_shutdown_handler(shutdown: &Shutdown) -> tokio::task::JoinHandle<()> {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        let mut listener = shutdown.listener();

        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                eprintln!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                () = listener.closed() => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupt received, stopping run");
                    drop(shutdown.close());
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    info!("SIGTERM received, stopping run");
                    drop(shutdown.close());
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                () = listener.closed() => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupt received, stopping run");
                    drop(shutdown.close());
                }
            }
        }
    })
}
