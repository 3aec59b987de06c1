//! Rows the table renders

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::filter::{DomainFilters, build_predicate};
use crate::sort::{SortSpec, compare};
use crate::status::{DomainStatus, classify, days_until_expiry};
use crate::types::Domain;

/// One visible table row with its derived values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRow {
    pub domain: Domain,
    pub status: DomainStatus,
    pub days_until_expiry: Option<i64>,
    pub display_index: usize,
}

/// Filter, stable-sort, then attach status, days left and display index.
pub fn derive_rows(
    domains: &[Domain],
    display_index: &HashMap<String, usize>,
    filters: &DomainFilters,
    search: &str,
    sort: SortSpec,
    today: NaiveDate,
) -> Vec<DomainRow> {
    let predicate = build_predicate(filters, search, today);

    let mut visible: Vec<&Domain> = domains.iter().filter(|d| predicate(*d)).collect();
    visible.sort_by(|a, b| compare(a, b, sort, today));

    visible
        .into_iter()
        .map(|domain| DomainRow {
            status: classify(domain, today),
            days_until_expiry: days_until_expiry(domain, today),
            display_index: display_index.get(&domain.id).copied().unwrap_or_default(),
            domain: domain.clone(),
        })
        .collect()
}
