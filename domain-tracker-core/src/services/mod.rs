//! Business logic service layer

mod auth_service;
mod domain_service;

pub use auth_service::AuthService;
pub use domain_service::DomainService;

use std::sync::Arc;

use domain_tracker_api::{ApiError, DomainApi};

use crate::error::{CoreError, CoreResult};
use crate::traits::SessionStore;
use crate::types::Session;

/// Service context - holds all dependencies
///
/// The platform layer builds this and injects its session storage.
pub struct ServiceContext {
    /// Backend client
    pub api: Arc<dyn DomainApi>,
    /// Session persistence
    pub session_store: Arc<dyn SessionStore>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(api: Arc<dyn DomainApi>, session_store: Arc<dyn SessionStore>) -> Self {
        Self { api, session_store }
    }

    /// Current session, or [`CoreError::NotAuthenticated`].
    pub async fn require_session(&self) -> CoreResult<Session> {
        self.session_store
            .load()
            .await?
            .ok_or(CoreError::NotAuthenticated)
    }

    /// Drop the stored session, logging instead of failing.
    pub async fn clear_session(&self) {
        if let Err(e) = self.session_store.clear().await {
            log::error!("Failed to clear session: {e}");
        }
    }

    /// Handle a backend error; a rejected token ends the session.
    pub async fn handle_api_error(&self, err: ApiError) -> CoreError {
        if let ApiError::Unauthorized { .. } = &err {
            log::warn!("Backend rejected the session token, logging out");
            self.clear_session().await;
            return CoreError::SessionExpired;
        }
        CoreError::Api(err)
    }
}
