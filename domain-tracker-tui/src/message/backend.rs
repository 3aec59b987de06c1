//! Results sent back by backend tasks

use domain_tracker_core::{CoreResult, Domain, Session};

/// Completion of one [`Command`](super::Command)
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// Stored session read on startup, `None` when logged out
    SessionRestored(Option<Session>),
    LoggedIn(CoreResult<Session>),
    LoggedOut,
    DomainsLoaded(CoreResult<Vec<Domain>>),
    /// Add or request form saved
    DomainCreated(CoreResult<Domain>),
    /// Edit form saved
    DomainSaved(CoreResult<Domain>),
    /// Archive toggled or expiry extended from the table
    DomainUpdated(CoreResult<Domain>),
    DomainDeleted {
        id: String,
        result: CoreResult<()>,
    },
}
