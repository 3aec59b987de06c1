use async_trait::async_trait;

use crate::error::{ApiError, Result};
use crate::types::{ApiDomain, DomainPayload, LoginRequest, LoginResponse};

/// Raw backend error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status code.
    pub status: u16,
    /// Message from the error body, or the body itself.
    pub message: String,
}

/// Extra information used when mapping an error (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Domain id addressed by the request (`NotFound`).
    pub domain_id: Option<String>,
    /// Domain name being written (`Conflict`).
    pub domain_name: Option<String>,
}

/// Maps raw backend errors to [`ApiError`] (internal).
pub(crate) trait ApiErrorMapper {
    /// Map a non-success response to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ApiError;
}

/// Client for the domains backend.
///
/// Every call except [`login`](Self::login) takes the session's bearer token;
/// `None` sends the request unauthenticated.
#[async_trait]
pub trait DomainApi: Send + Sync {
    /// Base URL the client talks to.
    fn base_url(&self) -> &str;

    /// `POST /api/login`.
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse>;

    /// `GET /api/domains`. Records failing validation are skipped with a warning.
    async fn list_domains(&self, token: Option<&str>) -> Result<Vec<ApiDomain>>;

    /// `POST /api/domains`. Returns the stored record with its new id.
    async fn create_domain(&self, token: Option<&str>, payload: &DomainPayload)
    -> Result<ApiDomain>;

    /// `PUT /api/domains/{id}`. Full replace; returns the canonical record.
    async fn update_domain(
        &self,
        token: Option<&str>,
        id: &str,
        payload: &DomainPayload,
    ) -> Result<ApiDomain>;

    /// `DELETE /api/domains/{id}`.
    async fn delete_domain(&self, token: Option<&str>, id: &str) -> Result<()>;
}
