use serde::{Deserialize, Serialize};

pub use domain_tracker_api::{User, UserGroup};

/// Permission key that unlocks create, edit, archive and delete.
pub const PERMISSION_DOMAINS: &str = "domains";

/// Stored login: the bearer token plus the profile returned with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    /// Whether the session's user holds `permission`. No profile means no permissions.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.has_permission(permission))
    }
}
