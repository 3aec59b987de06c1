//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          main loop (app.rs)                          │
//! │                                                                      │
//! │   ┌───────┐  translate  ┌─────────┐  consume   ┌────────┐            │
//! │   │ Event │ ──────────▶ │ Message │ ─────────▶ │ Update │ ── Model   │
//! │   └───────┘             └─────────┘            └───┬────┘            │
//! │                              ▲                     │ Command         │
//! │                              │ BackendEvent        ▼                 │
//! │                              │               ┌───────────┐           │
//! │                              └────────────── │  Backend  │           │
//! │                                 mpsc channel └─────┬─────┘           │
//! │                                                    │ tokio task      │
//! │                                                    ▼                 │
//! │                                        ┌──────────────────────┐      │
//! │                                        │ domain-tracker-core  │      │
//! │                                        └──────────────────────┘      │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! Backend layer: services and persistence
//!
//! The UI thread never blocks on the network. [`Backend::dispatch`] spawns
//! each [`Command`] onto a private tokio runtime; the task sends its
//! [`BackendEvent`] back over a channel that the main loop drains every tick.
//!
//!     config.rs           AppConfig: config.toml plus environment overrides
//!     session_store.rs    FileSessionStore: session.json in the data dir

mod config;
mod session_store;

pub use config::AppConfig;
pub use session_store::FileSessionStore;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use domain_tracker_core::{AuthService, DomainService, ServiceContext, create_domain_api};
use tokio::runtime::Runtime;

use crate::message::{BackendEvent, Command};

/// Services shared by every backend task
struct Services {
    ctx: Arc<ServiceContext>,
    auth: AuthService,
    domains: DomainService,
}

/// Runs commands off the UI thread
pub struct Backend {
    runtime: Runtime,
    services: Arc<Services>,
    tx: Sender<BackendEvent>,
    rx: Receiver<BackendEvent>,
}

impl Backend {
    /// Build the REST client and the file session store from `config`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("domain-tracker-backend")
            .enable_all()
            .build()
            .context("Failed to start the backend runtime")?;

        let api = create_domain_api(&config.api_config())
            .context("Failed to create the backend client")?;
        let store = Arc::new(FileSessionStore::new());
        log::info!("Session file {}", store.path().display());

        Ok(Self::with_context(runtime, ServiceContext::new(api, store)))
    }

    /// Use an existing runtime and service context.
    pub fn with_context(runtime: Runtime, ctx: ServiceContext) -> Self {
        let ctx = Arc::new(ctx);
        let services = Arc::new(Services {
            auth: AuthService::new(ctx.clone()),
            domains: DomainService::new(ctx.clone()),
            ctx,
        });
        let (tx, rx) = mpsc::channel();

        Self {
            runtime,
            services,
            tx,
            rx,
        }
    }

    /// Run `command` in the background.
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {}", command.name());
        let services = self.services.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let event = execute(&services, command).await;
            if tx.send(event).is_err() {
                log::debug!("UI has gone away, dropping backend result");
            }
        });
    }

    /// Next finished command, if any.
    pub fn try_recv(&self) -> Option<BackendEvent> {
        self.rx.try_recv().ok()
    }
}

async fn execute(services: &Services, command: Command) -> BackendEvent {
    match command {
        Command::RestoreSession => {
            BackendEvent::SessionRestored(services.ctx.require_session().await.ok())
        }

        Command::Login { email, password } => {
            BackendEvent::LoggedIn(services.auth.login(&email, &password).await)
        }

        Command::Logout => {
            if let Err(e) = services.auth.logout().await {
                log::error!("Logout failed to clear the session: {e}");
            }
            BackendEvent::LoggedOut
        }

        Command::LoadDomains => BackendEvent::DomainsLoaded(services.domains.list_domains().await),

        Command::CreateDomain { draft, mode } => {
            BackendEvent::DomainCreated(services.domains.create_domain(&draft, mode).await)
        }

        Command::UpdateDomain { id, draft } => {
            BackendEvent::DomainSaved(services.domains.update_domain(&id, &draft).await)
        }

        Command::SetArchived { domain, archived } => {
            BackendEvent::DomainUpdated(services.domains.set_archived(&domain, archived).await)
        }

        Command::ExtendDomain { domain, years } => {
            BackendEvent::DomainUpdated(services.domains.extend_domain(&domain, years).await)
        }

        Command::DeleteDomain { id } => {
            let result = services.domains.delete_domain(&id).await;
            BackendEvent::DomainDeleted { id, result }
        }
    }
}
