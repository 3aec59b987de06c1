//! Backend work requested by the update layer

use std::fmt;

use domain_tracker_core::{Domain, DomainDraft, FormMode};

/// One backend call. Executed by [`Backend::dispatch`](crate::backend::Backend::dispatch),
/// answered with a [`BackendEvent`](super::BackendEvent).
#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    /// Read the stored session on startup
    RestoreSession,
    Login {
        email: String,
        password: String,
    },
    Logout,
    LoadDomains,
    CreateDomain {
        draft: DomainDraft,
        mode: FormMode,
    },
    UpdateDomain {
        id: String,
        draft: DomainDraft,
    },
    SetArchived {
        domain: Domain,
        archived: bool,
    },
    ExtendDomain {
        domain: Domain,
        years: u32,
    },
    DeleteDomain {
        id: String,
    },
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RestoreSession => "restore-session",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::LoadDomains => "load-domains",
            Self::CreateDomain { .. } => "create-domain",
            Self::UpdateDomain { .. } => "update-domain",
            Self::SetArchived { .. } => "set-archived",
            Self::ExtendDomain { .. } => "extend-domain",
            Self::DeleteDomain { .. } => "delete-domain",
        }
    }
}

// Hand-written so the password never shows up in logs or test output
impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"***")
                .finish(),
            Self::CreateDomain { draft, mode } => f
                .debug_struct("CreateDomain")
                .field("draft", draft)
                .field("mode", mode)
                .finish(),
            Self::UpdateDomain { id, draft } => f
                .debug_struct("UpdateDomain")
                .field("id", id)
                .field("draft", draft)
                .finish(),
            Self::SetArchived { domain, archived } => f
                .debug_struct("SetArchived")
                .field("id", &domain.id)
                .field("archived", archived)
                .finish(),
            Self::ExtendDomain { domain, years } => f
                .debug_struct("ExtendDomain")
                .field("id", &domain.id)
                .field("years", years)
                .finish(),
            Self::DeleteDomain { id } => f.debug_struct("DeleteDomain").field("id", id).finish(),
            Self::RestoreSession | Self::Logout | Self::LoadDomains => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let cmd = Command::Login {
            email: "a@b.c".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{cmd:?}");
        assert!(printed.contains("a@b.c"));
        assert!(!printed.contains("hunter2"));
    }
}
