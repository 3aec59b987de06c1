//! `DomainApi` trait implementation

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{DomainApi, ErrorContext};
use crate::types::{ApiDomain, DomainPayload, LoginRequest, LoginResponse};
use crate::utils::log_sanitizer::sanitize_for_log;

use super::{DOMAINS_PATH, LOGIN_PATH, RestDomainApi};

/// Deserialize each array element on its own so one malformed record does not
/// hide the rest.
fn parse_domain_list(text: &str) -> Result<Vec<ApiDomain>> {
    let values: Vec<Value> = HttpUtils::parse_json(text)?;
    let total = values.len();

    let domains: Vec<ApiDomain> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<ApiDomain>(value.clone()) {
            Ok(domain) => Some(domain),
            Err(e) => {
                log::warn!(
                    "Skipping malformed domain record ({e}): {}",
                    sanitize_for_log(&value.to_string())
                );
                None
            }
        })
        .collect();

    if domains.len() < total {
        log::warn!("Accepted {}/{} domain records", domains.len(), total);
    }
    Ok(domains)
}

#[async_trait]
impl DomainApi for RestDomainApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        let text = self
            .send(
                Method::POST,
                LOGIN_PATH,
                None,
                Some(req),
                ErrorContext::default(),
            )
            .await?;
        HttpUtils::parse_json(&text)
    }

    async fn list_domains(&self, token: Option<&str>) -> Result<Vec<ApiDomain>> {
        let text = self
            .send::<()>(
                Method::GET,
                DOMAINS_PATH,
                token,
                None,
                ErrorContext::default(),
            )
            .await?;
        parse_domain_list(&text)
    }

    async fn create_domain(
        &self,
        token: Option<&str>,
        payload: &DomainPayload,
    ) -> Result<ApiDomain> {
        let context = ErrorContext {
            domain_name: Some(payload.name.clone()),
            ..Default::default()
        };
        let text = self
            .send(Method::POST, DOMAINS_PATH, token, Some(payload), context)
            .await?;
        HttpUtils::parse_json(&text)
    }

    async fn update_domain(
        &self,
        token: Option<&str>,
        id: &str,
        payload: &DomainPayload,
    ) -> Result<ApiDomain> {
        let context = ErrorContext {
            domain_id: Some(id.to_string()),
            domain_name: Some(payload.name.clone()),
        };
        let text = self
            .send(
                Method::PUT,
                &Self::domain_path(id),
                token,
                Some(payload),
                context,
            )
            .await?;
        HttpUtils::parse_json(&text)
    }

    async fn delete_domain(&self, token: Option<&str>, id: &str) -> Result<()> {
        let context = ErrorContext {
            domain_id: Some(id.to_string()),
            ..Default::default()
        };
        self.send::<()>(Method::DELETE, &Self::domain_path(id), token, None, context)
            .await?;
        Ok(())
    }
}
