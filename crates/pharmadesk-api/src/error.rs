//! Error types for backend API calls.

use reqwest::StatusCode;
use thiserror::Error;

use pharmadesk_http::HttpError;

/// Failure of a backend API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint URL")]
    InvalidUrl {
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    ClientBuild {
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// A configuration value was unusable.
    #[error("invalid configuration value for {name}")]
    Config {
        /// Name of the offending setting.
        name: &'static str,
    },
    /// Pipeline or transport failure below the API layer.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The backend answered with a non-2xx status.
    ///
    /// `message` carries the backend's `{"error": ...}` body when present,
    /// else the status' canonical reason.
    #[error("backend rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status of the rejection.
        status: StatusCode,
        /// Human-readable reason reported by the backend.
        message: String,
    },
}

impl ApiError {
    /// Status code of a backend rejection, if that is what this is.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias for API results.
pub type ApiResult<T> = Result<T, ApiError>;
