use thiserror::Error;

use super::RequestBuildError;

/// Outcome-level failure of a single request attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out: {source}")]
    Timeout {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Request failed: {source}")]
    Other {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Request could not be constructed: {0}")]
    Build(#[from] RequestBuildError),
}

impl TransportError {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                source: Box::new(err),
            }
        } else {
            TransportError::Other {
                source: Box::new(err),
            }
        }
    }
}
