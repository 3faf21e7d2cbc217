use crate::error::TransportError;

/// Classification of one settled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Status 200 exactly.
    Success,
    /// Status 429 or 503.
    Blocked,
    /// Any other status, or a non-timeout error.
    Failed,
    Timeout,
}

impl Outcome {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            200 => Outcome::Success,
            429 | 503 => Outcome::Blocked,
            _ => Outcome::Failed,
        }
    }

    #[must_use]
    pub const fn from_error(err: &TransportError) -> Self {
        if err.is_timeout() {
            Outcome::Timeout
        } else {
            Outcome::Failed
        }
    }
}
