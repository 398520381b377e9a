//! Error types for the external service clients

use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to external collaborators
#[derive(Error, Debug)]
pub enum ClientError {
    /// No signed-in session
    #[error("Not authenticated: {reason}")]
    Unauthenticated {
        /// Why the identity could not be resolved
        reason: String,
    },

    /// Service communication error
    #[error("Failed to communicate with {service}: {message}")]
    ServiceCommunication {
        /// Service name
        service: String,
        /// Error message
        message: String,
    },

    /// Service answered with a non-success status
    #[error("{service} returned HTTP {status}: {body}")]
    UnexpectedStatus {
        /// Service name
        service: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Response body is not the JSON the caller expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Create an unauthenticated error
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
        }
    }

    /// Create a service communication error
    pub fn service_communication(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceCommunication {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(service: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            service: service.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error means the caller has no valid session
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated { .. })
            || matches!(self, Self::UnexpectedStatus { status: 401, .. })
    }

    /// Get error severity level for logging
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unauthenticated { .. } => ErrorSeverity::Info,
            Self::UnexpectedStatus { .. } | Self::Json(_) => ErrorSeverity::Warning,
            Self::ServiceCommunication { .. } | Self::Http(_) => ErrorSeverity::Error,
            Self::Configuration { .. } => ErrorSeverity::Critical,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Informational - not really an error
    Info,
    /// Warning - should be investigated
    Warning,
    /// Error - operation failed but system continues
    Error,
    /// Critical - system health impacted
    Critical,
}
