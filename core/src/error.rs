//! Error taxonomy shared by request construction and response classification.
//!
//! # Design
//! Every failure of a call surfaces as exactly one `NetworkError`. The kinds
//! are stable across the four call shapes: construction problems are split
//! into `InvalidUrl` and `EncodingError`, transport failures always become
//! `Transport`, and any non-2xx status becomes `ServerError` with the raw body
//! kept for the caller to inspect.

use thiserror::Error;

/// Errors produced while building a request or classifying its response.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The endpoint could not be resolved to a usable request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The endpoint parameters could not be serialized.
    #[error("parameter encoding failed: {0}")]
    EncodingError(String),

    /// A 2xx response arrived without the body the call required.
    #[error("response contained no data")]
    NoData,

    /// The response body could not be decoded into the requested type.
    #[error("response body could not be decoded")]
    DecodingError,

    /// The server answered with a status outside 200..=299.
    #[error("server responded with HTTP {status}")]
    ServerError { status: u16, body: Option<Vec<u8>> },

    /// The transport failed before a response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response carried no recognizable status, or the call was torn down.
    #[error("unknown network error")]
    UnknownError,
}

impl NetworkError {
    /// HTTP status carried by a `ServerError`.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
