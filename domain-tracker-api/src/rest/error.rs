//! Status code mapping

use crate::error::ApiError;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};
use crate::types::ErrorBody;

use super::RestDomainApi;

impl RawApiError {
    /// Pull `error` or `message` out of a JSON error body, falling back to the raw text.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| body.trim().to_string());
        Self { status, message }
    }
}

fn non_empty(message: String) -> Option<String> {
    if message.is_empty() { None } else { Some(message) }
}

impl ApiErrorMapper for RestDomainApi {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ApiError {
        match raw.status {
            401 => ApiError::Unauthorized {
                raw_message: non_empty(raw.message),
            },
            403 => ApiError::PermissionDenied {
                raw_message: non_empty(raw.message),
            },
            404 => ApiError::NotFound {
                resource: context
                    .domain_id
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: non_empty(raw.message),
            },
            409 => ApiError::Conflict {
                resource: context
                    .domain_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: non_empty(raw.message),
            },
            status => ApiError::HttpStatus {
                status,
                message: if raw.message.is_empty() {
                    "<empty body>".to_string()
                } else {
                    raw.message
                },
            },
        }
    }
}
