use thiserror::Error;

/// Errors from the remote drinks service.
///
/// The view treats every variant uniformly as "operation failed"; the
/// distinction only exists for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, send, or body decode).
    #[error("request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },
}
