//! Domain Tracker Core Library
//!
//! Business logic for tracking company domain registrations:
//! - Status classification, filtering, sorting and display numbering
//! - Form validation and lifecycle transitions (archive, extend)
//! - The dashboard state container
//! - Auth and domain services over the backend client
//!
//! Everything except [`services`] is pure and synchronous. Storage is abstracted
//! through [`SessionStore`] so each frontend supplies its own.

pub mod display_index;
pub mod error;
pub mod filter;
pub mod services;
pub mod sort;
pub mod status;
pub mod store;
pub mod traits;
pub mod types;
pub mod validation;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use display_index::assign_display_index;
pub use error::{CoreError, CoreResult};
pub use filter::{
    DomainFilters, FieldFilter, FilterOptions, StatusFilter, build_predicate, filter_options,
};
pub use services::{AuthService, DomainService, ServiceContext};
pub use sort::{SortDirection, SortField, SortSpec, compare, sort_domains};
pub use status::{DomainStatus, classify, classify_today, days_until_expiry};
pub use store::{Action, DashboardState, DraftEdit, FormState};
pub use traits::SessionStore;
pub use types::{Domain, DomainDraft, Session, User};
pub use validation::{FormField, FormMode, ValidationErrors, validate_draft};
pub use view::{DomainRow, derive_rows};

// Backend client, for frontends wiring up a `ServiceContext`
pub use domain_tracker_api::{
    ApiConfig, ApiError, DomainApi, create_domain_api, format_renew_date, parse_renew_date,
};
