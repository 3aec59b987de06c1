//! Domain management service

use std::sync::Arc;

use domain_tracker_api::ApiError;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Domain, DomainDraft, PERMISSION_DOMAINS, Session};
use crate::validation::{FormMode, validate_draft};

/// Domain CRUD against the backend
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Load the full working set.
    pub async fn list_domains(&self) -> CoreResult<Vec<Domain>> {
        let session = self.ctx.require_session().await?;

        match self.ctx.api.list_domains(Some(&session.token)).await {
            Ok(records) => {
                let domains: Vec<Domain> = records.into_iter().map(Domain::from).collect();
                for domain in domains.iter().filter(|d| d.needs_review()) {
                    log::warn!(
                        "Domain {} is marked for resignation but still has an expiry date",
                        domain.name
                    );
                }
                log::debug!("Loaded {} domains", domains.len());
                Ok(domains)
            }
            Err(e) => Err(self.ctx.handle_api_error(e).await),
        }
    }

    /// Validate and create. In request mode the expiry date is dropped and the
    /// requester's email is attached.
    pub async fn create_domain(&self, draft: &DomainDraft, mode: FormMode) -> CoreResult<Domain> {
        let session = self.require_permission().await?;
        validate_draft(draft, mode).map_err(CoreError::Validation)?;

        let mut draft = draft.clone();
        if mode == FormMode::Request {
            draft.expire_date = None;
        }

        let requested_by = session
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .filter(|email| !email.is_empty());
        let payload = draft.to_payload(requested_by);

        match self
            .ctx
            .api
            .create_domain(Some(&session.token), &payload)
            .await
        {
            Ok(created) => {
                log::info!("Created domain {} ({})", created.name, created.id);
                Ok(created.into())
            }
            Err(ApiError::Conflict { .. }) => {
                log::warn!("Domain {} already exists", payload.name);
                Err(CoreError::AlreadyExists(payload.name))
            }
            Err(e) => Err(self.ctx.handle_api_error(e).await),
        }
    }

    /// Validate and fully replace the record `id`.
    pub async fn update_domain(&self, id: &str, draft: &DomainDraft) -> CoreResult<Domain> {
        self.require_permission().await?;
        validate_draft(draft, FormMode::Edit).map_err(CoreError::Validation)?;
        self.replace(&draft.clone().into_domain(id)).await
    }

    /// Archive or restore, applying the archived/expiry/resignation coupling.
    pub async fn set_archived(&self, domain: &Domain, archived: bool) -> CoreResult<Domain> {
        self.require_permission().await?;
        self.replace(&domain.clone().set_archived(archived)).await
    }

    /// Push the expiry date forward by `years`.
    pub async fn extend_domain(&self, domain: &Domain, years: u32) -> CoreResult<Domain> {
        self.require_permission().await?;
        let extended = domain.extend_expiry(years)?;
        self.replace(&extended).await
    }

    pub async fn delete_domain(&self, id: &str) -> CoreResult<()> {
        let session = self.require_permission().await?;

        match self.ctx.api.delete_domain(Some(&session.token), id).await {
            Ok(()) => {
                log::info!("Deleted domain {id}");
                Ok(())
            }
            Err(ApiError::NotFound { .. }) => Err(CoreError::DomainNotFound(id.to_string())),
            Err(e) => Err(self.ctx.handle_api_error(e).await),
        }
    }

    async fn replace(&self, domain: &Domain) -> CoreResult<Domain> {
        let session = self.ctx.require_session().await?;

        match self
            .ctx
            .api
            .update_domain(Some(&session.token), &domain.id, &domain.to_payload())
            .await
        {
            Ok(updated) => {
                log::info!("Updated domain {} ({})", updated.name, updated.id);
                Ok(updated.into())
            }
            Err(ApiError::NotFound { .. }) => Err(CoreError::DomainNotFound(domain.id.clone())),
            Err(ApiError::Conflict { .. }) => Err(CoreError::AlreadyExists(domain.name.clone())),
            Err(e) => Err(self.ctx.handle_api_error(e).await),
        }
    }

    async fn require_permission(&self) -> CoreResult<Session> {
        let session = self.ctx.require_session().await?;
        if session.has_permission(PERMISSION_DOMAINS) {
            Ok(session)
        } else {
            Err(CoreError::PermissionDenied(PERMISSION_DOMAINS.to_string()))
        }
    }
}
