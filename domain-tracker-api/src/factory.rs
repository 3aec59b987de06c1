//! Client factory.

use std::sync::Arc;

use crate::error::Result;
use crate::rest::RestDomainApi;
use crate::traits::DomainApi;
use crate::types::ApiConfig;

/// Creates the backend client as a shareable `Arc<dyn DomainApi>`.
///
/// # Examples
///
/// ```rust,no_run
/// use domain_tracker_api::{ApiConfig, create_domain_api};
///
/// let api = create_domain_api(&ApiConfig::default()).unwrap();
/// assert_eq!(api.base_url(), "http://localhost:5000");
/// ```
pub fn create_domain_api(config: &ApiConfig) -> Result<Arc<dyn DomainApi>> {
    log::info!("Using domains backend at {}", config.base_url);
    Ok(Arc::new(RestDomainApi::new(config)?))
}
