//! Login session service

use std::sync::Arc;

use domain_tracker_api::LoginRequest;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Session, User};

/// Login, logout and permission queries
pub struct AuthService {
    ctx: Arc<ServiceContext>,
}

impl AuthService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Exchange credentials for a token and store the session.
    ///
    /// Wrong credentials surface as the backend's `Unauthorized` error; nothing
    /// is stored in that case.
    pub async fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CoreError::NotAuthenticated);
        }

        let response = self
            .ctx
            .api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.ctx.session_store.save(&session).await?;

        log::info!("Logged in as {email}");
        Ok(session)
    }

    pub async fn logout(&self) -> CoreResult<()> {
        self.ctx.session_store.clear().await?;
        log::info!("Logged out");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        matches!(self.ctx.session_store.load().await, Ok(Some(_)))
    }

    pub async fn current_user(&self) -> CoreResult<Option<User>> {
        Ok(self
            .ctx
            .session_store
            .load()
            .await?
            .and_then(|session| session.user))
    }

    /// Whether the stored user holds `permission`. Logged out means no.
    pub async fn has_permission(&self, permission: &str) -> bool {
        match self.ctx.session_store.load().await {
            Ok(Some(session)) => session.has_permission(permission),
            Ok(None) => false,
            Err(e) => {
                log::error!("Failed to read session: {e}");
                false
            }
        }
    }

    /// Bearer token for outgoing requests.
    pub async fn token(&self) -> CoreResult<Option<String>> {
        Ok(self
            .ctx
            .session_store
            .load()
            .await?
            .map(|session| session.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockDomainApi, MockSessionStore, make_context, sample_session};
    use crate::types::PERMISSION_DOMAINS;
    use domain_tracker_api::ApiError;

    #[tokio::test]
    async fn login_stores_session() {
        let api = Arc::new(MockDomainApi::new());
        let store = Arc::new(MockSessionStore::new());
        let auth = AuthService::new(make_context(api.clone(), store.clone()));

        let session = auth.login(" admin@example.com ", "secret").await.unwrap();
        assert_eq!(session.token, "mock-token");
        assert_eq!(store.current().await, Some(session));
        assert!(auth.is_authenticated().await);
        assert!(auth.has_permission(PERMISSION_DOMAINS).await);
        assert_eq!(auth.token().await.unwrap().as_deref(), Some("mock-token"));
        assert_eq!(
            api.last_login_email().await.as_deref(),
            Some("admin@example.com")
        );
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let api = Arc::new(MockDomainApi::new());
        api.fail_next(ApiError::Unauthorized {
            raw_message: Some("Invalid credentials".into()),
        })
        .await;
        let store = Arc::new(MockSessionStore::new());
        let auth = AuthService::new(make_context(api, store.clone()));

        let result = auth.login("a@b.c", "wrong").await;
        assert!(matches!(
            result,
            Err(CoreError::Api(ApiError::Unauthorized { .. }))
        ));
        assert_eq!(store.current().await, None);
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn blank_credentials_rejected_locally() {
        let api = Arc::new(MockDomainApi::new());
        let auth = AuthService::new(make_context(api.clone(), Arc::new(MockSessionStore::new())));
        assert!(matches!(
            auth.login("", "x").await,
            Err(CoreError::NotAuthenticated)
        ));
        assert_eq!(api.last_login_email().await, None);
    }

    #[tokio::test]
    async fn storage_failure_surfaces() {
        let store = Arc::new(MockSessionStore::new());
        store.set_save_error(Some("read-only".into())).await;
        let auth = AuthService::new(make_context(Arc::new(MockDomainApi::new()), store));
        assert!(matches!(
            auth.login("a@b.c", "pw").await,
            Err(CoreError::StorageError(_))
        ));
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let store = Arc::new(MockSessionStore::with_session(sample_session(true)));
        let auth = AuthService::new(make_context(Arc::new(MockDomainApi::new()), store.clone()));

        assert!(auth.current_user().await.unwrap().is_some());
        auth.logout().await.unwrap();
        assert_eq!(store.current().await, None);
        assert!(!auth.has_permission(PERMISSION_DOMAINS).await);
    }

    #[tokio::test]
    async fn user_without_permission() {
        let store = Arc::new(MockSessionStore::with_session(sample_session(false)));
        let auth = AuthService::new(make_context(Arc::new(MockDomainApi::new()), store));
        assert!(auth.is_authenticated().await);
        assert!(!auth.has_permission(PERMISSION_DOMAINS).await);
    }
}
