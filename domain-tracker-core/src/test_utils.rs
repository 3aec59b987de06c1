//! Test helpers
//!
//! Mock implementations and factory helpers for tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use domain_tracker_api::{
    ApiDomain, ApiError, DomainApi, DomainPayload, LoginRequest, LoginResponse, User, UserGroup,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::SessionStore;
use crate::types::{PERMISSION_DOMAINS, Session};

// ===== MockDomainApi =====

/// In-memory backend with the same conflict/not-found behaviour as the real one.
pub struct MockDomainApi {
    domains: RwLock<Vec<ApiDomain>>,
    next_id: RwLock<u32>,
    /// If Some, the next call returns this error
    fail_next: RwLock<Option<ApiError>>,
    last_token: RwLock<Option<String>>,
    last_payload: RwLock<Option<DomainPayload>>,
    last_login_email: RwLock<Option<String>>,
    calls: RwLock<usize>,
}

impl MockDomainApi {
    pub fn new() -> Self {
        Self::with_domains(Vec::new())
    }

    pub fn with_domains(domains: Vec<ApiDomain>) -> Self {
        Self {
            domains: RwLock::new(domains),
            next_id: RwLock::new(100),
            fail_next: RwLock::new(None),
            last_token: RwLock::new(None),
            last_payload: RwLock::new(None),
            last_login_email: RwLock::new(None),
            calls: RwLock::new(0),
        }
    }

    pub async fn fail_next(&self, err: ApiError) {
        *self.fail_next.write().await = Some(err);
    }

    pub async fn last_token(&self) -> Option<String> {
        self.last_token.read().await.clone()
    }

    pub async fn last_payload(&self) -> Option<DomainPayload> {
        self.last_payload.read().await.clone()
    }

    pub async fn last_login_email(&self) -> Option<String> {
        self.last_login_email.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        *self.calls.read().await
    }

    async fn begin(&self, token: Option<&str>) -> Result<(), ApiError> {
        *self.calls.write().await += 1;
        *self.last_token.write().await = token.map(str::to_string);
        match self.fail_next.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record_from(id: String, payload: &DomainPayload) -> ApiDomain {
        ApiDomain {
            id,
            name: payload.name.clone(),
            expire_date: payload.expire_date,
            company: payload.company.clone(),
            registrar: payload.registrar.clone(),
            resignation: payload.resignation,
            archived: payload.archived,
        }
    }
}

#[async_trait]
impl DomainApi for MockDomainApi {
    fn base_url(&self) -> &str {
        "http://mock"
    }

    async fn login(&self, req: &LoginRequest) -> domain_tracker_api::Result<LoginResponse> {
        *self.last_login_email.write().await = Some(req.email.clone());
        self.begin(None).await?;
        Ok(LoginResponse {
            token: "mock-token".to_string(),
            user: Some(sample_user(true)),
        })
    }

    async fn list_domains(&self, token: Option<&str>) -> domain_tracker_api::Result<Vec<ApiDomain>> {
        self.begin(token).await?;
        Ok(self.domains.read().await.clone())
    }

    async fn create_domain(
        &self,
        token: Option<&str>,
        payload: &DomainPayload,
    ) -> domain_tracker_api::Result<ApiDomain> {
        self.begin(token).await?;
        *self.last_payload.write().await = Some(payload.clone());

        let mut domains = self.domains.write().await;
        if domains.iter().any(|d| d.name == payload.name) {
            return Err(ApiError::Conflict {
                resource: payload.name.clone(),
                raw_message: None,
            });
        }

        let mut next_id = self.next_id.write().await;
        let record = Self::record_from(next_id.to_string(), payload);
        *next_id += 1;
        domains.push(record.clone());
        Ok(record)
    }

    async fn update_domain(
        &self,
        token: Option<&str>,
        id: &str,
        payload: &DomainPayload,
    ) -> domain_tracker_api::Result<ApiDomain> {
        self.begin(token).await?;
        *self.last_payload.write().await = Some(payload.clone());

        let mut domains = self.domains.write().await;
        let Some(slot) = domains.iter_mut().find(|d| d.id == id) else {
            return Err(ApiError::NotFound {
                resource: id.to_string(),
                raw_message: None,
            });
        };
        *slot = Self::record_from(id.to_string(), payload);
        Ok(slot.clone())
    }

    async fn delete_domain(&self, token: Option<&str>, id: &str) -> domain_tracker_api::Result<()> {
        self.begin(token).await?;
        let mut domains = self.domains.write().await;
        let before = domains.len();
        domains.retain(|d| d.id != id);
        if domains.len() == before {
            return Err(ApiError::NotFound {
                resource: id.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}

// ===== MockSessionStore =====

pub struct MockSessionStore {
    session: RwLock<Option<Session>>,
    /// If Some, save returns this error
    save_error: RwLock<Option<String>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
            save_error: RwLock::new(None),
        }
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    pub async fn current(&self) -> Option<Session> {
        self.session.read().await.clone()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self) -> CoreResult<Option<Session>> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &Session) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

// ===== Factories =====

pub fn make_context(api: Arc<MockDomainApi>, store: Arc<MockSessionStore>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(api, store))
}

pub fn sample_user(can_edit: bool) -> User {
    User {
        id: "u1".to_string(),
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Admin".to_string(),
        group: Some(UserGroup {
            name: Some("staff".to_string()),
            permissions: if can_edit {
                vec![PERMISSION_DOMAINS.to_string()]
            } else {
                vec!["reports".to_string()]
            },
        }),
    }
}

pub fn sample_session(can_edit: bool) -> Session {
    Session {
        token: "session-token".to_string(),
        user: Some(sample_user(can_edit)),
    }
}

pub fn sample_api_domain(id: &str, name: &str) -> ApiDomain {
    ApiDomain {
        id: id.to_string(),
        name: name.to_string(),
        expire_date: NaiveDate::from_ymd_opt(2026, 3, 1),
        company: "GFC SP. Z.O.O".to_string(),
        registrar: "OVH".to_string(),
        resignation: false,
        archived: false,
    }
}
