//! Outbound request execution.
//!
//! The engine only needs a status code, a way to discard the body, and a
//! timeout-vs-other error split. Dropping a response releases its
//! connection, so every exit path hands the handle back.
mod client;
mod drain;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::RequestSpec;

pub use client::{HttpResponse, HttpTransport, TransportConfig};

/// What to do with a response body before releasing the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyPolicy {
    /// Release immediately without reading the body.
    #[default]
    Flood,
    /// Read and discard the whole body first.
    Polite,
}

impl BodyPolicy {
    #[must_use]
    pub const fn from_flood_flag(http_flood: bool) -> Self {
        if http_flood {
            BodyPolicy::Flood
        } else {
            BodyPolicy::Polite
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BodyPolicy::Flood => "flood",
            BodyPolicy::Polite => "polite",
        }
    }
}

#[async_trait]
pub trait ResponseHandle: Send {
    fn status(&self) -> u16;

    /// Reads the remaining body and discards it, returning the byte count.
    ///
    /// # Errors
    ///
    /// Returns an error when the body stream fails or times out.
    async fn drain(self) -> Result<u64, TransportError>;
}

#[async_trait]
pub trait Transport: Send + Sync + 'static {
    type Response: ResponseHandle;

    /// Performs exactly one attempt for `request`. No retries, no redirects.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Timeout`] when the attempt timed out and
    /// another variant for every other failure.
    async fn send(&self, request: RequestSpec) -> Result<Self::Response, TransportError>;
}

/// Applies `policy` to `response` and releases it, returning the status.
pub async fn settle<R: ResponseHandle>(response: R, policy: BodyPolicy) -> u16 {
    let status = response.status();
    match policy {
        BodyPolicy::Flood => drop(response),
        BodyPolicy::Polite => {
            if let Err(err) = response.drain().await {
                tracing::debug!("Failed to drain response body: {}", err);
            }
        }
    }
    status
}
