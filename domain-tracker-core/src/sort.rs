//! Sort comparator

use std::cell::RefCell;
use std::cmp::Ordering;

use chrono::NaiveDate;
use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::status::classify;
use crate::types::Domain;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    ExpireDate,
    Company,
    Registrar,
    Status,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "#",
            Self::Name => "Domain",
            Self::ExpireDate => "Expires",
            Self::Company => "Company",
            Self::Registrar => "Registrar",
            Self::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::ExpireDate,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Clicking the active column flips direction; another column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Compare two records under `spec`.
///
/// Status compares by ordinal; every other column compares as text, missing
/// values being the empty string.
pub fn compare(a: &Domain, b: &Domain, spec: SortSpec, today: NaiveDate) -> Ordering {
    let ordering = match spec.field {
        SortField::Status => classify(a, today)
            .sort_ordinal()
            .cmp(&classify(b, today).sort_ordinal()),
        field => compare_text(&sort_key(a, field), &sort_key(b, field)),
    };

    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable in-place sort.
pub fn sort_domains(domains: &mut [Domain], spec: SortSpec, today: NaiveDate) {
    domains.sort_by(|a, b| compare(a, b, spec, today));
}

fn sort_key(domain: &Domain, field: SortField) -> String {
    match field {
        SortField::Id => domain.id.clone(),
        SortField::Name => domain.name.clone(),
        SortField::ExpireDate => domain_tracker_api::format_renew_date(domain.expire_date),
        SortField::Company => domain.company.clone(),
        SortField::Registrar => domain.registrar.clone(),
        SortField::Status => String::new(),
    }
}

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Unicode collation (CLDR root), raw text as tiebreak so the order stays total.
///
/// Accented letters sort next to their base letter: `Ćma` before `Dom`.
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with_borrow_mut(|collator| collator.collate(a, b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn domain(id: &str, name: &str, days: Option<i64>) -> Domain {
        Domain {
            id: id.into(),
            name: name.into(),
            expire_date: days.map(|d| today() + Duration::days(d)),
            company: "GFC SP. Z.O.O".into(),
            registrar: String::new(),
            resignation: false,
            archived: false,
        }
    }

    fn names(domains: &[Domain]) -> Vec<&str> {
        domains.iter().map(|d| d.name.as_str()).collect()
    }

    fn spec(field: SortField, direction: SortDirection) -> SortSpec {
        SortSpec { field, direction }
    }

    #[test]
    fn default_is_expiry_ascending() {
        assert_eq!(
            SortSpec::default(),
            spec(SortField::ExpireDate, SortDirection::Ascending)
        );
    }

    #[test]
    fn toggle_same_field_flips_new_field_resets() {
        let mut s = SortSpec::default();
        s.toggle(SortField::Name);
        assert_eq!(s, spec(SortField::Name, SortDirection::Ascending));
        s.toggle(SortField::Name);
        assert_eq!(s, spec(SortField::Name, SortDirection::Descending));
        s.toggle(SortField::Company);
        assert_eq!(s, spec(SortField::Company, SortDirection::Ascending));
    }

    #[test]
    fn names_ignore_case() {
        let mut list = vec![
            domain("1", "beta.com", Some(1)),
            domain("2", "Alpha.com", Some(1)),
            domain("3", "gamma.com", Some(1)),
        ];
        sort_domains(
            &mut list,
            spec(SortField::Name, SortDirection::Ascending),
            today(),
        );
        assert_eq!(names(&list), vec!["Alpha.com", "beta.com", "gamma.com"]);

        sort_domains(
            &mut list,
            spec(SortField::Name, SortDirection::Descending),
            today(),
        );
        assert_eq!(names(&list), vec!["gamma.com", "beta.com", "Alpha.com"]);
    }

    #[test]
    fn accented_companies_sort_by_base_letter() {
        let mut list: Vec<Domain> = ["Zeta", "Łódź Sp.", "Dom", "Ćma", "Beta"]
            .iter()
            .enumerate()
            .map(|(i, company)| Domain {
                company: (*company).to_string(),
                ..domain(&i.to_string(), &format!("d{i}.com"), Some(10))
            })
            .collect();
        sort_domains(
            &mut list,
            spec(SortField::Company, SortDirection::Ascending),
            today(),
        );
        let companies: Vec<&str> = list.iter().map(|d| d.company.as_str()).collect();
        assert_eq!(companies, vec!["Beta", "Ćma", "Dom", "Łódź Sp.", "Zeta"]);
    }

    #[test]
    fn text_order_is_total() {
        assert_eq!(compare_text("abc", "abc"), Ordering::Equal);
        assert_ne!(compare_text("abc", "ABC"), Ordering::Equal);
        assert_eq!(compare_text("", "a"), Ordering::Less);
    }

    #[test]
    fn missing_expiry_sorts_first_ascending() {
        let mut list = vec![
            domain("1", "late.com", Some(300)),
            domain("2", "none.com", None),
            domain("3", "soon.com", Some(3)),
        ];
        sort_domains(&mut list, SortSpec::default(), today());
        assert_eq!(names(&list), vec!["none.com", "soon.com", "late.com"]);
    }

    #[test]
    fn status_sort_is_stable() {
        let mut list = vec![
            domain("1", "a-active.com", Some(200)),
            domain("2", "b-expired.com", Some(-3)),
            domain("3", "c-active.com", Some(90)),
            domain("4", "d-requested.com", None),
            domain("5", "e-expired.com", Some(-40)),
        ];
        sort_domains(
            &mut list,
            spec(SortField::Name, SortDirection::Ascending),
            today(),
        );
        sort_domains(
            &mut list,
            spec(SortField::Status, SortDirection::Ascending),
            today(),
        );
        assert_eq!(
            names(&list),
            vec![
                "d-requested.com",
                "a-active.com",
                "c-active.com",
                "b-expired.com",
                "e-expired.com"
            ]
        );
    }

    #[test]
    fn descending_reverses() {
        let a = domain("1", "a.com", Some(1));
        let b = domain("2", "b.com", Some(1));
        let asc = spec(SortField::Id, SortDirection::Ascending);
        let desc = spec(SortField::Id, SortDirection::Descending);
        assert_eq!(compare(&a, &b, asc, today()), Ordering::Less);
        assert_eq!(compare(&a, &b, desc, today()), Ordering::Greater);
    }
}
