//! Unified error type definition

use thiserror::Error;

use crate::validation::ValidationErrors;

// Re-export library error type
pub use domain_tracker_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Form or transition input rejected before reaching the backend
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The logged-in user lacks the required permission
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// No session is stored
    #[error("Not logged in")]
    NotAuthenticated,

    /// The backend rejected the token; the session has been cleared
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Domain id not present in the working set or on the backend
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// The backend already holds a domain with this name
    #[error("Domain already exists: {0}")]
    AlreadyExists(String),

    /// Session storage error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Backend error (converted from the API client)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether this is expected behaviour (bad input, missing resource, auth),
    /// used to pick the log level.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::PermissionDenied(_)
            | Self::NotAuthenticated
            | Self::SessionExpired
            | Self::DomainNotFound(_)
            | Self::AlreadyExists(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
