use thiserror::Error;

/// Unified error type for every call made against the domains backend.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — connection refused, DNS failure, 502/503/504
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — HTTP 429
///
/// The built-in HTTP client retries these with exponential backoff, but only for
/// idempotent methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A network-level error occurred.
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend rate limit has been exceeded (HTTP 429).
    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited {
        /// Suggested wait time in seconds, from the `Retry-After` header.
        retry_after: Option<u64>,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// The bearer token is missing, invalid or expired (HTTP 401).
    #[error("Unauthorized{}", message_suffix(.raw_message))]
    Unauthorized {
        /// Message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user may not perform this operation (HTTP 403).
    #[error("Permission denied{}", message_suffix(.raw_message))]
    PermissionDenied {
        /// Message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("'{resource}' not found{}", message_suffix(.raw_message))]
    NotFound {
        /// Resource the request addressed (domain id or path).
        resource: String,
        /// Message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The resource already exists (HTTP 409).
    #[error("'{resource}' already exists{}", message_suffix(.raw_message))]
    Conflict {
        /// Resource that collided (usually the domain name).
        resource: String,
        /// Message from the backend, if available.
        raw_message: Option<String>,
    },

    /// Any other non-success status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// Status code returned by the backend.
        status: u16,
        /// Message extracted from the error body, or the body itself.
        message: String,
    },

    /// The backend's response could not be parsed into the expected shape.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized, or the client could not be built.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the failure.
        detail: String,
    },
}

#[allow(clippy::ref_option)]
fn message_suffix(raw_message: &Option<String>) -> String {
    match raw_message {
        Some(msg) if !msg.is_empty() => format!(": {msg}"),
        _ => String::new(),
    }
}

#[allow(clippy::ref_option)]
fn retry_suffix(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

impl ApiError {
    /// Whether this is an expected outcome (bad input, missing resource, auth),
    /// used to pick the log level.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::Conflict { .. }
        )
    }

    /// Whether the failure is transient and the request may be repeated.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
