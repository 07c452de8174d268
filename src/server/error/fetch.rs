use thiserror::Error;

/// Failure of a single upstream API read.
///
/// Every variant fails the ingestion job that triggered it, so the queue retries it.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream answered with a non-2xx status.
    ///
    /// `reason` and `message` come from the upstream error body when it has one.
    #[error("Upstream returned {status}: {reason} {message}")]
    Upstream {
        status: u16,
        reason: String,
        message: String,
    },

    /// The request did not complete within the client timeout.
    #[error("Upstream request timed out")]
    Timeout,

    /// Connection, TLS, or redirect failure.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
