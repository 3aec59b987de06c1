//! Shared HTTP request handling.
//!
//! Sending, logging, reading the response and the retry loop live here so the
//! REST client only builds requests and maps status codes.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::utils::log_sanitizer::sanitize_for_log;

/// Log prefix for every backend call.
const LOG_TARGET: &str = "domains-api";

/// Upper bound for an honoured `Retry-After`.
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// Upper bound for exponential backoff.
const MAX_BACKOFF_MS: u64 = 10_000;

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return the status code and response text.
    ///
    /// 429 becomes [`ApiError::RateLimited`] and 502/503/504 become
    /// [`ApiError::NetworkError`] so the retry loop can pick them up. Every other
    /// status is returned to the caller for mapping.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{LOG_TARGET}] {method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{LOG_TARGET}] Response Status: {status_code}");

        // Read before the body consumes the response
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{LOG_TARGET}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ApiError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{LOG_TARGET}] Server unavailable (HTTP {status_code})");
            return Err(ApiError::NetworkError {
                detail: format!("HTTP {status_code}: {}", sanitize_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{LOG_TARGET}] Response Body: {}",
            sanitize_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body into `T`.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{LOG_TARGET}] JSON parse failed: {e}");
            log::error!(
                "[{LOG_TARGET}] Raw response: {}",
                sanitize_for_log(response_text)
            );
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Send a request, retrying transient failures up to `max_retries` times.
    ///
    /// Only [`ApiError::is_retryable`] errors are retried, with exponential
    /// backoff (100ms, 200ms, 400ms ... capped at 10s) or the server's
    /// `Retry-After` (capped at 30s). Callers pass `0` for non-idempotent
    /// requests.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ApiError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{LOG_TARGET}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method, url).await;
            };

            match Self::execute_request(req, method, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] {} {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        LOG_TARGET,
                        method,
                        url,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// `Retry-After` when the server sent one, exponential backoff otherwise.
fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    if let ApiError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS))
    } else {
        backoff_delay(attempt)
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // 2^attempt must not overflow
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // 100 * 2^7 = 12800ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_is_honoured_and_capped() {
        let e = ApiError::RateLimited {
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 3), Duration::from_secs(5));

        let e = ApiError::RateLimited {
            retry_after: Some(600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    #[test]
    fn rate_limited_without_header_backs_off() {
        let e = ApiError::RateLimited {
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 1), Duration::from_millis(200));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("<html>");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
