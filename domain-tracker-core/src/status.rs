//! Lifecycle status of a domain record

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::Domain;

/// Days before expiry during which a domain counts as expiring soon (inclusive).
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Derived lifecycle classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainStatus {
    Archived,
    Resigned,
    Requested,
    Expired,
    ExpiringSoon,
    Active,
}

impl DomainStatus {
    /// All statuses in filter-picker order.
    pub const ALL: [Self; 6] = [
        Self::Active,
        Self::ExpiringSoon,
        Self::Expired,
        Self::Requested,
        Self::Resigned,
        Self::Archived,
    ];

    /// Wire/string name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Archived => "archived",
            Self::Resigned => "resigned",
            Self::Requested => "requested",
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring-soon",
            Self::Active => "active",
        }
    }

    /// Human label for the table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Archived => "Archived",
            Self::Resigned => "Resigned",
            Self::Requested => "Requested",
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring soon",
            Self::Active => "Active",
        }
    }

    /// Position when sorting by status.
    pub fn sort_ordinal(self) -> u8 {
        match self {
            Self::Archived => 0,
            Self::Resigned => 1,
            Self::Requested => 2,
            Self::Active => 3,
            Self::ExpiringSoon => 4,
            Self::Expired => 5,
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown status: {s}"))
    }
}

/// Whole calendar days from `today` until the expiry date; negative once expired.
pub fn days_until_expiry(domain: &Domain, today: NaiveDate) -> Option<i64> {
    domain
        .expire_date
        .map(|expire| expire.signed_duration_since(today).num_days())
}

/// Classify `domain` as of `today`. First matching rule wins:
/// archived, resigned, no expiry date (requested), then by days left.
pub fn classify(domain: &Domain, today: NaiveDate) -> DomainStatus {
    if domain.archived {
        return DomainStatus::Archived;
    }
    if domain.resignation {
        return DomainStatus::Resigned;
    }
    match days_until_expiry(domain, today) {
        None => DomainStatus::Requested,
        Some(days) if days < 0 => DomainStatus::Expired,
        Some(days) if days <= EXPIRING_SOON_DAYS => DomainStatus::ExpiringSoon,
        Some(_) => DomainStatus::Active,
    }
}

/// [`classify`] against the local calendar date.
pub fn classify_today(domain: &Domain) -> DomainStatus {
    classify(domain, Local::now().date_naive())
}
