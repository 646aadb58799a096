use thiserror::Error;

pub type CallResult<T> = Result<T, CallError>;

#[derive(Debug, Error)]
pub enum CallError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("timeout: {0}")]
    Timeout(String),
}

impl CallError {
    /// Whether this failure was a timeout-triggered cancellation.
    ///
    /// Covers both our own timer expiring and the transport reporting a
    /// timeout on its side.
    pub fn is_timeout(&self) -> bool {
        match self {
            CallError::Timeout(_) => true,
            CallError::Http(err) => err.is_timeout(),
            _ => false,
        }
    }
}
