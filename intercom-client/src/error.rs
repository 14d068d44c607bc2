//! Error types for the Intercom client

use intercom_core::{MissingIdentifier, WireError};
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by an [`HttpClient`](crate::HttpClient) implementation
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },
}

impl TransportError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Errors returned by repository operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// No usable identifying field; raised before any request is made
    #[error("missing {resource} identifier")]
    MissingIdentifier { resource: &'static str },

    /// The `id` field of a response had an unexpected JSON type
    #[error("malformed identifier: expected a string or number, found {found}")]
    MalformedIdentifier { found: &'static str },

    /// The response body did not match the expected shape
    #[error("failed to decode response `{context}`: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be serialized
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Passed through unchanged from the HTTP client
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_not_found())
    }
}

impl From<MissingIdentifier> for ClientError {
    fn from(err: MissingIdentifier) -> Self {
        Self::MissingIdentifier {
            resource: err.resource,
        }
    }
}

impl From<WireError> for ClientError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::MalformedIdentifier { found } => Self::MalformedIdentifier { found },
            WireError::Decode { context, source } => Self::Decode { context, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let not_found = TransportError::api_error(404, "User Not Found");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let unavailable = TransportError::api_error(503, "Service Unavailable");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());
    }

    #[test]
    fn test_not_found_passes_through() {
        let err = ClientError::from(TransportError::api_error(404, "gone"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error (status 404): gone");
    }

    #[test]
    fn test_wire_errors_map_to_their_kind() {
        let err = ClientError::from(WireError::MalformedIdentifier { found: "array" });
        assert!(matches!(err, ClientError::MalformedIdentifier { found: "array" }));

        let err = ClientError::from(MissingIdentifier { resource: "user" });
        assert_eq!(err.to_string(), "missing user identifier");
    }
}
