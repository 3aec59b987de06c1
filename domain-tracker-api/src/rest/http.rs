//! Request helpers shared by all endpoints

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};

use super::RestDomainApi;

impl RestDomainApi {
    /// Send a request and return the body of a 2xx response.
    ///
    /// GET, PUT and DELETE are retried on transient failures; POST never is.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
        context: ErrorContext,
    ) -> Result<String> {
        let url = self.url(path);
        let mut request = self.client.request(method.clone(), &url);

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::SerializationError {
                detail: e.to_string(),
            })?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let retries = if is_idempotent(&method) {
            self.max_retries
        } else {
            0
        };

        let (status, text) =
            HttpUtils::execute_request_with_retry(request, method.as_str(), &url, retries).await?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let error = self.map_error(RawApiError::from_body(status, &text), context);
        if error.is_expected() {
            log::warn!("{method} {url} failed: {error}");
        } else {
            log::error!("{method} {url} failed: {error}");
        }
        Err(error)
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::PUT | Method::DELETE)
}
