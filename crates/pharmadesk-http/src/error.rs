//! Error types for the HTTP pipeline.

use thiserror::Error;

/// Failure raised by an augmenter or the transport terminal.
///
/// The pipeline never swallows these; whatever a stage returns reaches the
/// caller unmodified.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A header value could not be constructed (e.g. a token containing
    /// non-ASCII bytes).
    #[error("invalid value for header {name}")]
    InvalidHeader {
        /// Header the value was destined for.
        name: &'static str,
    },
    /// The network round trip failed (connect, timeout, protocol).
    #[error("request failed")]
    Transport {
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// A request payload could not be serialized to JSON.
    #[error("failed to encode request body")]
    Encode {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response body")]
    Decode {
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for pipeline results.
pub type HttpResult<T> = Result<T, HttpError>;
