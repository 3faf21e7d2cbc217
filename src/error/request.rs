use thiserror::Error;

use super::RandomError;

/// Failure to assemble one outbound request. Counted as a failed request by
/// the worker; never fatal to the run.
#[derive(Debug, Error)]
pub enum RequestBuildError {
    #[error("Invalid value for header '{header}': {source}")]
    InvalidHeaderValue {
        header: &'static str,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    #[error(transparent)]
    Random(#[from] RandomError),
    #[error("Invalid request '{url}': {source}")]
    InvalidRequest {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
