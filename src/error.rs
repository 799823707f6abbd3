//! Error types for the Bitbucket SDK.

use thiserror::Error;

/// Main error type for the Bitbucket SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error (connection, timeout, malformed response body)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Bitbucket API error
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Typed errors for non-2xx Bitbucket API responses.
///
/// Each variant corresponds to a status class; the message is taken from the
/// API's error body when present, otherwise `HTTP {status}`.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Credentials were rejected (401).
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// Access to the resource is denied (403).
    #[error("access denied: {message}")]
    Authorization { message: String },

    /// The resource does not exist (404).
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The request conflicts with remote state, e.g. a duplicate create (409).
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// The request was rate limited (429).
    #[error("rate limited: {message}")]
    RateLimited { message: String },

    /// The request was rejected as invalid (400 and other 4xx).
    #[error("invalid request ({status}): {message}")]
    Validation { status: u16, message: String },

    /// The server failed (5xx).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Build the variant matching an HTTP status code.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Authentication { message },
            403 => Self::Authorization { message },
            404 => Self::NotFound { message },
            409 => Self::Conflict { message },
            429 => Self::RateLimited { message },
            s if s >= 500 => Self::Server { status: s, message },
            s => Self::Validation { status: s, message },
        }
    }

    /// Get the HTTP status code this error corresponds to.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Authentication { .. } => 401,
            Self::Authorization { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::RateLimited { .. } => 429,
            Self::Validation { status, .. } | Self::Server { status, .. } => *status,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message }
            | Self::Authorization { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::RateLimited { message }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Whether this error is a 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_codes() {
        assert!(matches!(
            ApiError::from_status(401, "bad creds".into()),
            ApiError::Authentication { .. }
        ));
        assert!(matches!(
            ApiError::from_status(403, "no".into()),
            ApiError::Authorization { .. }
        ));
        assert!(matches!(
            ApiError::from_status(404, "gone".into()),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            ApiError::from_status(409, "dup".into()),
            ApiError::Conflict { .. }
        ));
        assert!(matches!(
            ApiError::from_status(429, "slow down".into()),
            ApiError::RateLimited { .. }
        ));
    }

    #[test]
    fn from_status_maps_status_classes() {
        let err = ApiError::from_status(503, "unavailable".into());
        assert!(matches!(err, ApiError::Server { status: 503, .. }));
        assert_eq!(err.status(), 503);

        let err = ApiError::from_status(422, "unprocessable".into());
        assert!(matches!(err, ApiError::Validation { status: 422, .. }));
        assert_eq!(err.status(), 422);
    }

    #[test]
    fn accessors_expose_status_and_message() {
        let err = ApiError::from_status(404, "Repository missing".into());
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Repository missing");
        assert!(err.is_not_found());
        assert!(!ApiError::from_status(409, "x".into()).is_not_found());
    }
}
