use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company used when the backend record carries none.
pub const UNKNOWN_COMPANY: &str = "Unknown";

// ============ Client configuration ============

/// Connection settings for [`RestDomainApi`](crate::RestDomainApi).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/api` suffix.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Retries for idempotent requests (0 disables retrying).
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 2,
        }
    }
}

// ============ Domain records ============

/// A domain record as returned by the backend, already normalized.
///
/// Deserialization is the validation boundary: `_id` and `domain` are required,
/// `renew` must be a date, a timestamp, `""` or `null`, missing company becomes
/// [`UNKNOWN_COMPANY`] and missing flags become `false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDomain")]
pub struct ApiDomain {
    /// Backend-assigned identifier.
    pub id: String,
    /// Fully-qualified domain name.
    pub name: String,
    /// Expiry date, absent for requested domains.
    pub expire_date: Option<NaiveDate>,
    /// Owning company.
    pub company: String,
    /// Registrar, may be empty.
    pub registrar: String,
    /// Owner intends to let the domain lapse.
    pub resignation: bool,
    /// Excluded from lifecycle tracking.
    pub archived: bool,
}

/// Loose shape accepted from the wire before normalization.
#[derive(Deserialize)]
struct RawDomain {
    #[serde(rename = "_id", alias = "id")]
    id: Option<String>,
    domain: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    renew: Option<NaiveDate>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    registrar: Option<String>,
    #[serde(default)]
    resignation: Option<bool>,
    #[serde(default)]
    archived: Option<bool>,
}

impl TryFrom<RawDomain> for ApiDomain {
    type Error = String;

    fn try_from(raw: RawDomain) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| "missing field `_id`".to_string())?;
        let name = raw
            .domain
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| format!("record '{id}' is missing field `domain`"))?;

        Ok(Self {
            id,
            name,
            expire_date: raw.renew,
            company: raw
                .company
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            registrar: raw.registrar.unwrap_or_default(),
            resignation: raw.resignation.unwrap_or(false),
            archived: raw.archived.unwrap_or(false),
        })
    }
}

/// Request body for create (`POST`) and full replace (`PUT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPayload {
    /// Fully-qualified domain name.
    #[serde(rename = "domain")]
    pub name: String,
    /// Expiry date, sent as `""` when absent.
    #[serde(rename = "renew", with = "crate::utils::datetime")]
    pub expire_date: Option<NaiveDate>,
    /// Owning company.
    pub company: String,
    /// Registrar.
    pub registrar: String,
    /// Resignation flag.
    pub resignation: bool,
    /// Archived flag.
    pub archived: bool,
    /// Email of the user filing the record; sent on create only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

// ============ Authentication ============

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain password; never logged.
    pub password: String,
}

/// Permission group attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Group name, if the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Permission keys, e.g. `"domains"`.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Authenticated user profile. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    #[serde(default, alias = "_id")]
    pub id: String,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Email, sent as `requestedBy` on create.
    #[serde(default)]
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Permission group.
    #[serde(default)]
    pub group: Option<UserGroup>,
}

impl User {
    /// Whether the user's group grants `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.group
            .as_ref()
            .is_some_and(|g| g.permissions.iter().any(|p| p == permission))
    }

    /// Name to show in the status bar.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.username.is_empty() {
            self.username.clone()
        } else {
            self.email.clone()
        }
    }
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Profile of the logged-in user.
    #[serde(default)]
    pub user: Option<User>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_wire_mapping() {
        let d: ApiDomain = serde_json::from_str(
            r#"{"_id":"1","domain":"x.com","renew":"2025-01-02T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(d.id, "1");
        assert_eq!(d.name, "x.com");
        assert_eq!(d.expire_date, NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(d.company, UNKNOWN_COMPANY);
        assert_eq!(d.registrar, "");
        assert!(!d.resignation);
        assert!(!d.archived);
    }

    #[test]
    fn domain_accepts_id_alias_and_nulls() {
        let d: ApiDomain = serde_json::from_str(
            r#"{"id":"7","domain":"y.pl","renew":null,"company":null,"registrar":"OVH","archived":true}"#,
        )
        .unwrap();
        assert_eq!(d.id, "7");
        assert_eq!(d.expire_date, None);
        assert_eq!(d.company, UNKNOWN_COMPANY);
        assert_eq!(d.registrar, "OVH");
        assert!(d.archived);
    }

    #[test]
    fn domain_requires_id_and_name() {
        assert!(serde_json::from_str::<ApiDomain>(r#"{"domain":"x.com"}"#).is_err());
        assert!(serde_json::from_str::<ApiDomain>(r#"{"_id":"1"}"#).is_err());
        assert!(serde_json::from_str::<ApiDomain>(r#"{"_id":"1","domain":"  "}"#).is_err());
    }

    #[test]
    fn domain_rejects_bad_renew() {
        let result =
            serde_json::from_str::<ApiDomain>(r#"{"_id":"1","domain":"x.com","renew":"soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_uses_backend_names() {
        let payload = DomainPayload {
            name: "example.com".into(),
            expire_date: None,
            company: "GFC SP. Z.O.O".into(),
            registrar: String::new(),
            resignation: false,
            archived: false,
            requested_by: Some("a@b.c".into()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["domain"], "example.com");
        assert_eq!(json["renew"], "");
        assert_eq!(json["requestedBy"], "a@b.c");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn payload_omits_requested_by_on_update() {
        let payload = DomainPayload {
            name: "example.com".into(),
            expire_date: NaiveDate::from_ymd_opt(2030, 5, 1),
            company: "c".into(),
            registrar: "r".into(),
            resignation: true,
            archived: false,
            requested_by: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["renew"], "2030-05-01");
        assert!(json.get("requestedBy").is_none());
    }

    #[test]
    fn user_permissions() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","email":"a@b.c","firstName":"Ada","lastName":"L","group":{"permissions":["domains","users"]},"extra":1}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.has_permission("domains"));
        assert!(!user.has_permission("billing"));
        assert_eq!(user.display_name(), "Ada L");

        let no_group = User::default();
        assert!(!no_group.has_permission("domains"));
    }
}
