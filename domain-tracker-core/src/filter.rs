//! Filter predicate composition

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{DomainStatus, classify};
use crate::types::Domain;

const ALL: &str = "all";

/// Status filter: everything, or exactly one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DomainStatus),
}

impl StatusFilter {
    fn matches(self, status: DomainStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Exact-match filter on a text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFilter {
    #[default]
    All,
    Exact(String),
}

impl FieldFilter {
    fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Exact(value) => f.write_str(value),
        }
    }
}

impl FromStr for FieldFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL {
            Self::All
        } else {
            Self::Exact(s.to_string())
        })
    }
}

/// The three dropdown filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFilters {
    pub status: StatusFilter,
    pub company: FieldFilter,
    pub registrar: FieldFilter,
}

impl DomainFilters {
    /// Number of filters narrowing the view.
    pub fn active_count(&self) -> usize {
        usize::from(self.status != StatusFilter::All)
            + usize::from(!self.company.is_all())
            + usize::from(!self.registrar.is_all())
    }

    /// Back to "all" everywhere.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Build the row predicate for `filters` plus the free-text `query`.
///
/// A blank query adds no constraint; otherwise name, company or registrar must
/// contain the trimmed query, ignoring case.
pub fn build_predicate(
    filters: &DomainFilters,
    query: &str,
    today: NaiveDate,
) -> impl Fn(&Domain) -> bool + use<> {
    let filters = filters.clone();
    let needle = query.trim().to_lowercase();

    move |domain: &Domain| {
        filters.status.matches(classify(domain, today))
            && filters.company.matches(&domain.company)
            && filters.registrar.matches(&domain.registrar)
            && matches_query(domain, &needle)
    }
}

fn matches_query(domain: &Domain, needle: &str) -> bool {
    needle.is_empty()
        || [&domain.name, &domain.company, &domain.registrar]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Values offered by the company and registrar pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub registrars: Vec<String>,
}

/// Distinct non-blank companies and registrars, in first-seen order.
pub fn filter_options(domains: &[Domain]) -> FilterOptions {
    FilterOptions {
        companies: unique_values(domains.iter().map(|d| d.company.as_str())),
        registrars: unique_values(domains.iter().map(|d| d.registrar.as_str())),
    }
}

fn unique_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn domain(id: &str, name: &str, company: &str, registrar: &str, days: Option<i64>) -> Domain {
        Domain {
            id: id.into(),
            name: name.into(),
            expire_date: days.map(|d| today() + Duration::days(d)),
            company: company.into(),
            registrar: registrar.into(),
            resignation: false,
            archived: false,
        }
    }

    fn sample() -> Vec<Domain> {
        vec![
            domain("1", "alpha.com", "GFC SP. Z.O.O", "OVH", Some(100)),
            domain("2", "beta.pl", "Logbox SP. Z.O.O.", "home.pl", Some(10)),
            domain("3", "gamma.eu", "GFC SP. Z.O.O", "", None),
            domain("4", "delta.com", "Logbox SP. Z.O.O.", "OVH", Some(-5)),
            domain("5", "epsilon.org", "GFC SP. Z.O.O", "OVH", Some(400)),
        ]
    }

    fn ids(domains: &[Domain], pred: impl Fn(&Domain) -> bool) -> Vec<String> {
        domains
            .iter()
            .filter(|d| pred(*d))
            .map(|d| d.id.clone())
            .collect()
    }

    #[test]
    fn all_filters_keep_everything() {
        let pred = build_predicate(&DomainFilters::default(), "   ", today());
        assert_eq!(ids(&sample(), pred).len(), 5);
    }

    #[test]
    fn status_filter_matches_classification() {
        let filters = DomainFilters {
            status: StatusFilter::Only(DomainStatus::Active),
            ..Default::default()
        };
        let pred = build_predicate(&filters, "", today());
        let expected: Vec<String> = sample()
            .into_iter()
            .filter(|d| classify(d, today()) == DomainStatus::Active)
            .map(|d| d.id)
            .collect();
        assert_eq!(ids(&sample(), pred), expected);
        assert_eq!(expected, vec!["1", "5"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let filters = DomainFilters {
            status: StatusFilter::All,
            company: FieldFilter::Exact("GFC SP. Z.O.O".into()),
            registrar: FieldFilter::Exact("OVH".into()),
        };
        let pred = build_predicate(&filters, "", today());
        assert_eq!(ids(&sample(), pred), vec!["1", "5"]);
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let pred = build_predicate(&DomainFilters::default(), "  LOGBOX ", today());
        assert_eq!(ids(&sample(), pred), vec!["2", "4"]);

        let pred = build_predicate(&DomainFilters::default(), "Home", today());
        assert_eq!(ids(&sample(), pred), vec!["2"]);
    }

    #[test]
    fn search_and_status_combine() {
        let filters = DomainFilters {
            status: StatusFilter::Only(DomainStatus::Expired),
            ..Default::default()
        };
        let pred = build_predicate(&filters, ".com", today());
        assert_eq!(ids(&sample(), pred), vec!["4"]);
    }

    #[test]
    fn active_count_and_reset() {
        let mut filters = DomainFilters {
            status: StatusFilter::Only(DomainStatus::Requested),
            company: FieldFilter::All,
            registrar: FieldFilter::Exact("OVH".into()),
        };
        assert_eq!(filters.active_count(), 2);
        filters.reset();
        assert_eq!(filters.active_count(), 0);
        assert_eq!(filters, DomainFilters::default());
    }

    #[test]
    fn filters_parse_and_display() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "expiring-soon".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(DomainStatus::ExpiringSoon))
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(DomainStatus::Expired).to_string(), "expired");
        assert_eq!("all".parse::<FieldFilter>(), Ok(FieldFilter::All));
        assert_eq!(FieldFilter::Exact("OVH".into()).to_string(), "OVH");
    }

    #[test]
    fn options_are_unique_non_blank_first_seen() {
        let options = filter_options(&sample());
        assert_eq!(
            options.companies,
            vec!["GFC SP. Z.O.O", "Logbox SP. Z.O.O."]
        );
        assert_eq!(options.registrars, vec!["OVH", "home.pl"]);
    }
}
