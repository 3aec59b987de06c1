//! REST client for the domains backend

mod api;
mod error;
mod http;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::types::ApiConfig;

pub(crate) const DOMAINS_PATH: &str = "/api/domains";
pub(crate) const LOGIN_PATH: &str = "/api/login";

/// [`DomainApi`](crate::DomainApi) over HTTP with `reqwest`.
pub struct RestDomainApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

impl RestDomainApi {
    /// Build a client from `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::SerializationError {
                detail: format!("Invalid base URL '{}'", config.base_url),
            });
        }

        Ok(Self {
            client: create_http_client(config)?,
            base_url,
            max_retries: config.max_retries,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn domain_path(id: &str) -> String {
        format!("{DOMAINS_PATH}/{}", urlencoding::encode(id))
    }
}

fn create_http_client(config: &ApiConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|e| ApiError::SerializationError {
            detail: format!("Failed to build HTTP client: {e}"),
        })
}
