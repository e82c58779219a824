//! Typed failures for the completion client.

use thiserror::Error;

/// Failure of a single extraction submission.
///
/// There is no retry at this layer; every variant surfaces directly to
/// the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connect, TLS, timeout, body I/O).
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The endpoint answered 2xx but the body was not a usable completion.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
