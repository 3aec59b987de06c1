//! Form validation

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::DomainDraft;

/// Labels of 1-63 chars without leading/trailing hyphens, at least one dot,
/// alphabetic TLD of 2+.
const DOMAIN_NAME_PATTERN: &str =
    r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$";

static DOMAIN_NAME_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(DOMAIN_NAME_PATTERN)
        .inspect_err(|e| log::error!("Domain name pattern failed to compile: {e}"))
        .ok()
});

/// What the form is being used for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    /// Register an existing domain; expiry date required.
    #[default]
    Add,
    /// Ask for a new domain to be bought; no expiry date yet.
    Request,
    /// Edit an existing record.
    Edit,
}

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    ExpireDate,
    Company,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ExpireDate => "expire_date",
            Self::Company => "company",
        }
    }
}

/// Per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
        }
        Ok(())
    }
}

pub fn is_valid_domain_name(name: &str) -> bool {
    DOMAIN_NAME_RE
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// Check a draft before it is sent anywhere.
pub fn validate_draft(draft: &DomainDraft, mode: FormMode) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(FormField::Name, "Domain name is required");
    } else if !is_valid_domain_name(name) {
        errors.insert(FormField::Name, "Invalid domain name format");
    }

    let expiry_required = mode != FormMode::Request && !draft.archived;
    if expiry_required && draft.expire_date.is_none() {
        errors.insert(FormField::ExpireDate, "Expiry date is required");
    }

    if draft.company.trim().is_empty() {
        errors.insert(FormField::Company, "Company is required");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(name: &str) -> DomainDraft {
        DomainDraft {
            name: name.into(),
            expire_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            company: "GFC SP. Z.O.O".into(),
            ..Default::default()
        }
    }

    #[test]
    fn domain_name_syntax() {
        for good in [
            "example.com",
            "sub.example.co.uk",
            "my-site.pl",
            "abc.de",
            "wp.pl",
            "go.com",
            "x.com",
        ] {
            assert!(is_valid_domain_name(good), "{good} should be valid");
        }
        for bad in [
            "-bad.com",
            "example",
            "a.b",
            "bad-.com",
            "abc.-x.com",
            "abc.x-.com",
            "exa mple.com",
            "example.c0m",
            "double..dot.com",
        ] {
            assert!(!is_valid_domain_name(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn valid_add_passes() {
        assert_eq!(validate_draft(&draft("example.com"), FormMode::Add), Ok(()));
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(validate_draft(&draft("  example.com  "), FormMode::Add), Ok(()));

        let errors = validate_draft(&draft("   "), FormMode::Add).unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some("Domain name is required"));
    }

    #[test]
    fn expiry_required_for_add_and_edit_only() {
        let no_date = DomainDraft {
            expire_date: None,
            ..draft("example.com")
        };
        for mode in [FormMode::Add, FormMode::Edit] {
            let errors = validate_draft(&no_date, mode).unwrap_err();
            assert!(errors.get(FormField::ExpireDate).is_some());
        }
        assert_eq!(validate_draft(&no_date, FormMode::Request), Ok(()));

        let archived = DomainDraft {
            archived: true,
            ..no_date
        };
        assert_eq!(validate_draft(&archived, FormMode::Edit), Ok(()));
    }

    #[test]
    fn collects_every_field_error() {
        let empty = DomainDraft::default();
        let errors = validate_draft(&empty, FormMode::Add).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.to_string(),
            "name: Domain name is required; expire_date: Expiry date is required; company: Company is required"
        );
    }
}
