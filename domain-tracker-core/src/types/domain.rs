use chrono::{Months, NaiveDate};
use domain_tracker_api::{ApiDomain, DomainPayload};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::{FormField, ValidationErrors};

/// Companies offered by the form's company picker. Any non-empty value is accepted.
pub const KNOWN_COMPANIES: &[&str] = &["GFC SP. Z.O.O", "Logbox SP. Z.O.O."];

/// Largest number of years a single extension may add.
pub const MAX_EXTEND_YEARS: u32 = 9;

/// A tracked domain registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default, with = "domain_tracker_api::renew_date")]
    pub expire_date: Option<NaiveDate>,
    pub company: String,
    #[serde(default)]
    pub registrar: String,
    #[serde(default)]
    pub resignation: bool,
    #[serde(default)]
    pub archived: bool,
}

/// A domain without an id: the form's working copy and the body of a create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDraft {
    pub name: String,
    #[serde(default, with = "domain_tracker_api::renew_date")]
    pub expire_date: Option<NaiveDate>,
    pub company: String,
    #[serde(default)]
    pub registrar: String,
    #[serde(default)]
    pub resignation: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Domain {
    /// Archive or restore. Archiving clears the expiry date and the resignation
    /// flag; restoring only clears the archived flag.
    #[must_use]
    pub fn set_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        if archived {
            self.expire_date = None;
            self.resignation = false;
        }
        self
    }

    /// Push the expiry date forward by `years` calendar years (`1..=MAX_EXTEND_YEARS`).
    ///
    /// Feb 29 lands on Feb 28 when the target year is not a leap year: the
    /// day is clamped to the month's end, never rolled over into March
    /// (2024-02-29 + 2 years is 2026-02-28, not 2026-03-01).
    pub fn extend_expiry(&self, years: u32) -> CoreResult<Self> {
        if self.archived {
            return Err(expiry_error("Archived domains cannot be extended"));
        }
        let Some(current) = self.expire_date else {
            return Err(expiry_error("Requested domains have no expiry date to extend"));
        };
        if !(1..=MAX_EXTEND_YEARS).contains(&years) {
            return Err(expiry_error(format!(
                "Extension must be between 1 and {MAX_EXTEND_YEARS} years"
            )));
        }

        let extended = current
            .checked_add_months(Months::new(years * 12))
            .ok_or_else(|| expiry_error("Extended date is out of range"))?;

        Ok(Self {
            expire_date: Some(extended),
            ..self.clone()
        })
    }

    /// Resignation announced while an expiry date is still on file.
    ///
    /// Such records classify as resigned; this only flags them for a human look.
    pub fn needs_review(&self) -> bool {
        self.resignation && self.expire_date.is_some()
    }

    /// Editable copy without the id.
    pub fn to_draft(&self) -> DomainDraft {
        DomainDraft {
            name: self.name.clone(),
            expire_date: self.expire_date,
            company: self.company.clone(),
            registrar: self.registrar.clone(),
            resignation: self.resignation,
            archived: self.archived,
        }
    }

    /// Full-replace body for `PUT`.
    pub fn to_payload(&self) -> DomainPayload {
        self.to_draft().to_payload(None)
    }
}

impl DomainDraft {
    /// Same coupling as [`Domain::set_archived`].
    #[must_use]
    pub fn set_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        if archived {
            self.expire_date = None;
            self.resignation = false;
        }
        self
    }

    /// Attach an id, producing the record a successful save stands for.
    pub fn into_domain(self, id: impl Into<String>) -> Domain {
        Domain {
            id: id.into(),
            name: self.name,
            expire_date: self.expire_date,
            company: self.company,
            registrar: self.registrar,
            resignation: self.resignation,
            archived: self.archived,
        }
    }

    /// Request body with trimmed text fields.
    pub fn to_payload(&self, requested_by: Option<String>) -> DomainPayload {
        DomainPayload {
            name: self.name.trim().to_string(),
            expire_date: self.expire_date,
            company: self.company.trim().to_string(),
            registrar: self.registrar.trim().to_string(),
            resignation: self.resignation,
            archived: self.archived,
            requested_by,
        }
    }
}

impl From<ApiDomain> for Domain {
    fn from(api: ApiDomain) -> Self {
        Self {
            id: api.id,
            name: api.name,
            expire_date: api.expire_date,
            company: api.company,
            registrar: api.registrar,
            resignation: api.resignation,
            archived: api.archived,
        }
    }
}

fn expiry_error(message: impl Into<String>) -> CoreError {
    let mut errors = ValidationErrors::default();
    errors.insert(FormField::ExpireDate, message);
    CoreError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn domain(expire: Option<NaiveDate>) -> Domain {
        Domain {
            id: "1".into(),
            name: "example.com".into(),
            expire_date: expire,
            company: "GFC SP. Z.O.O".into(),
            registrar: "OVH".into(),
            resignation: false,
            archived: false,
        }
    }

    #[test]
    fn archiving_clears_expiry_and_resignation() {
        let d = Domain {
            resignation: true,
            ..domain(Some(date(2030, 1, 1)))
        };
        let archived = d.set_archived(true);
        assert!(archived.archived);
        assert_eq!(archived.expire_date, None);
        assert!(!archived.resignation);
    }

    #[test]
    fn unarchiving_only_clears_flag() {
        let d = domain(None).set_archived(true).set_archived(false);
        assert!(!d.archived);
        assert_eq!(d.expire_date, None);
        assert!(!d.resignation);
    }

    #[test]
    fn extend_leap_day() {
        let d = domain(Some(date(2024, 2, 29)));
        let extended = d.extend_expiry(2).unwrap();
        assert_eq!(extended.expire_date, Some(date(2026, 2, 28)));
        assert_eq!(extended.id, d.id);
    }

    #[test]
    fn extend_by_one_year() {
        let d = domain(Some(date(2025, 7, 15)));
        assert_eq!(
            d.extend_expiry(1).unwrap().expire_date,
            Some(date(2026, 7, 15))
        );
    }

    #[test]
    fn extend_rejects_archived_and_requested() {
        let archived = domain(Some(date(2030, 1, 1))).set_archived(true);
        assert!(matches!(
            archived.extend_expiry(1),
            Err(CoreError::Validation(_))
        ));

        let requested = domain(None);
        assert!(matches!(
            requested.extend_expiry(1),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn extend_rejects_out_of_range_years() {
        let d = domain(Some(date(2030, 1, 1)));
        assert!(d.extend_expiry(0).is_err());
        assert!(d.extend_expiry(MAX_EXTEND_YEARS + 1).is_err());
        assert!(d.extend_expiry(MAX_EXTEND_YEARS).is_ok());
    }

    #[test]
    fn needs_review_when_resigned_with_expiry() {
        let d = Domain {
            resignation: true,
            ..domain(Some(date(2030, 1, 1)))
        };
        assert!(d.needs_review());
        assert!(
            !Domain {
                resignation: true,
                ..domain(None)
            }
            .needs_review()
        );
        assert!(!domain(Some(date(2030, 1, 1))).needs_review());
    }

    #[test]
    fn draft_round_trip_keeps_fields() {
        let d = domain(Some(date(2030, 1, 1)));
        assert_eq!(d.to_draft().into_domain("1"), d);
    }

    #[test]
    fn payload_trims_and_carries_requester() {
        let draft = DomainDraft {
            name: "  example.com ".into(),
            company: "Logbox SP. Z.O.O.".into(),
            ..Default::default()
        };
        let payload = draft.to_payload(Some("me@example.com".into()));
        assert_eq!(payload.name, "example.com");
        assert_eq!(payload.requested_by.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn serializes_empty_expiry_as_blank() {
        let json = serde_json::to_value(domain(None)).unwrap();
        assert_eq!(json["expireDate"], "");
        assert_eq!(json["name"], "example.com");
    }
}
