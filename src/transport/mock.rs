use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::RequestSpec;

use super::{ResponseHandle, Transport};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Behavior {
    Status(u16),
    Timeout,
    Refused,
}

#[derive(Debug, Clone)]
pub(crate) struct MockTransport {
    behavior: Behavior,
    latency: Duration,
    sent: Arc<AtomicU64>,
    drained: Arc<AtomicU64>,
}

impl MockTransport {
    pub(crate) fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            latency: Duration::from_millis(1),
            sent: Arc::new(AtomicU64::new(0)),
            drained: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub(crate) fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub(crate) fn drained(&self) -> u64 {
        self.drained.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub(crate) struct MockResponse {
    status: u16,
    drained: Arc<AtomicU64>,
}

#[async_trait]
impl ResponseHandle for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn drain(self) -> Result<u64, TransportError> {
        self.drained.fetch_add(1, Ordering::Relaxed);
        Ok(0)
    }
}

#[async_trait]
impl Transport for MockTransport {
    type Response = MockResponse;

    async fn send(&self, _request: RequestSpec) -> Result<MockResponse, TransportError> {
        self.sent.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.latency).await;
        match self.behavior {
            Behavior::Status(status) => Ok(MockResponse {
                status,
                drained: Arc::clone(&self.drained),
            }),
            Behavior::Timeout => Err(TransportError::Timeout {
                source: "simulated timeout".into(),
            }),
            Behavior::Refused => Err(TransportError::Other {
                source: "connection refused".into(),
            }),
        }
    }
}
