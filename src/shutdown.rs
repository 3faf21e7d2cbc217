//! One-shot, idempotent stop signal shared by the run.
use std::sync::Arc;

use tokio::sync::watch;

/// Closing side of the stop signal. Cheap to clone; every clone closes the
/// same signal.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Closes the signal. Returns `true` only for the call that closed it.
    pub fn close(&self) -> bool {
        self.tx.send_if_modified(|closed| {
            if *closed {
                false
            } else {
                *closed = true;
                true
            }
        })
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the signal is closed. Resolves immediately if it
    /// already is.
    pub async fn closed(&mut self) {
        drop(self.rx.wait_for(|closed| *closed).await);
    }
}
