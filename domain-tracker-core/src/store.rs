//! Dashboard state container
//!
//! All dashboard state lives in [`DashboardState`] and changes only through
//! [`DashboardState::apply`]. Renderers read it and derive rows with
//! [`DashboardState::rows`].

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::display_index::assign_display_index;
use crate::filter::{DomainFilters, FieldFilter, FilterOptions, StatusFilter, filter_options};
use crate::sort::{SortField, SortSpec};
use crate::types::{Domain, DomainDraft, MAX_EXTEND_YEARS};
use crate::validation::{FormMode, ValidationErrors};
use crate::view::{DomainRow, derive_rows};

/// Add/request/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        /// Record being edited; `None` for add/request.
        target_id: Option<String>,
        draft: DomainDraft,
        errors: ValidationErrors,
        submitting: bool,
    },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Open {
                submitting: true,
                ..
            }
        )
    }
}

/// One field change in the open form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    ExpireDate(Option<NaiveDate>),
    Company(String),
    Registrar(String),
    Resignation(bool),
    /// Goes through [`DomainDraft::set_archived`].
    Archived(bool),
}

impl DraftEdit {
    fn apply_to(self, draft: DomainDraft) -> DomainDraft {
        match self {
            Self::Name(name) => DomainDraft { name, ..draft },
            Self::ExpireDate(expire_date) => DomainDraft {
                expire_date,
                ..draft
            },
            Self::Company(company) => DomainDraft { company, ..draft },
            Self::Registrar(registrar) => DomainDraft { registrar, ..draft },
            Self::Resignation(resignation) => DomainDraft {
                resignation,
                ..draft
            },
            Self::Archived(archived) => draft.set_archived(archived),
        }
    }
}

/// Everything that can happen to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Loading,
    Loaded(Vec<Domain>),
    LoadFailed(String),
    Created(Domain),
    Replaced(Domain),
    Removed(String),
    SetStatusFilter(StatusFilter),
    SetCompanyFilter(FieldFilter),
    SetRegistrarFilter(FieldFilter),
    ResetFilters,
    SetSearch(String),
    ToggleSort(SortField),
    OpenForm {
        mode: FormMode,
        target: Option<Domain>,
    },
    EditDraft(DraftEdit),
    FormInvalid(ValidationErrors),
    FormSubmitting,
    FormFailed(String),
    CloseForm,
    RequestDelete(String),
    CancelDelete,
    IncreaseExtendYears,
    DecreaseExtendYears,
    SessionEnded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    domains: Vec<Domain>,
    display_index: HashMap<String, usize>,
    filters: DomainFilters,
    search: String,
    sort: SortSpec,
    form: FormState,
    pending_delete: Option<String>,
    extend_years: u32,
    loading: bool,
    last_error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            display_index: HashMap::new(),
            filters: DomainFilters::default(),
            search: String::new(),
            sort: SortSpec::default(),
            form: FormState::Closed,
            pending_delete: None,
            extend_years: 1,
            loading: false,
            last_error: None,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loading => {
                self.loading = true;
            }
            Action::Loaded(domains) => {
                self.domains = domains;
                self.loading = false;
                self.last_error = None;
                self.reindex();
            }
            Action::LoadFailed(message) => {
                self.loading = false;
                self.last_error = Some(message);
            }
            Action::Created(domain) => {
                self.domains.push(domain);
                self.reindex();
            }
            Action::Replaced(domain) => {
                if let Some(slot) = self.domains.iter_mut().find(|d| d.id == domain.id) {
                    *slot = domain;
                    self.reindex();
                } else {
                    log::warn!("Replaced domain {} is not in the working set", domain.id);
                }
            }
            Action::Removed(id) => {
                self.domains.retain(|d| d.id != id);
                if self.pending_delete.as_deref() == Some(id.as_str()) {
                    self.pending_delete = None;
                }
                self.reindex();
            }
            Action::SetStatusFilter(status) => self.filters.status = status,
            Action::SetCompanyFilter(company) => self.filters.company = company,
            Action::SetRegistrarFilter(registrar) => self.filters.registrar = registrar,
            Action::ResetFilters => self.filters.reset(),
            Action::SetSearch(search) => self.search = search,
            Action::ToggleSort(field) => self.sort.toggle(field),
            Action::OpenForm { mode, target } => {
                let target_id = target.as_ref().map(|d| d.id.clone());
                let mut draft = target.map(|d| d.to_draft()).unwrap_or_default();
                if mode == FormMode::Request {
                    draft.expire_date = None;
                }
                self.form = FormState::Open {
                    mode,
                    target_id,
                    draft,
                    errors: ValidationErrors::default(),
                    submitting: false,
                };
            }
            Action::EditDraft(edit) => {
                if let FormState::Open {
                    draft,
                    errors,
                    submitting: false,
                    ..
                } = &mut self.form
                {
                    *draft = edit.apply_to(std::mem::take(draft));
                    *errors = ValidationErrors::default();
                }
            }
            Action::FormInvalid(new_errors) => {
                if let FormState::Open {
                    errors, submitting, ..
                } = &mut self.form
                {
                    *errors = new_errors;
                    *submitting = false;
                }
            }
            Action::FormSubmitting => {
                if let FormState::Open { submitting, .. } = &mut self.form {
                    *submitting = true;
                }
            }
            Action::FormFailed(message) => {
                if let FormState::Open { submitting, .. } = &mut self.form {
                    *submitting = false;
                }
                self.last_error = Some(message);
            }
            Action::CloseForm => self.form = FormState::Closed,
            Action::RequestDelete(id) => self.pending_delete = Some(id),
            Action::CancelDelete => self.pending_delete = None,
            Action::IncreaseExtendYears => {
                self.extend_years = (self.extend_years + 1).min(MAX_EXTEND_YEARS);
            }
            Action::DecreaseExtendYears => {
                self.extend_years = self.extend_years.saturating_sub(1).max(1);
            }
            Action::SessionEnded => *self = Self::default(),
        }
    }

    fn reindex(&mut self) {
        self.display_index = assign_display_index(&self.domains);
    }

    /// Rows for the current filters, search and sort.
    pub fn rows(&self, today: NaiveDate) -> Vec<DomainRow> {
        derive_rows(
            &self.domains,
            &self.display_index,
            &self.filters,
            &self.search,
            self.sort,
            today,
        )
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    pub fn display_index(&self) -> &HashMap<String, usize> {
        &self.display_index
    }

    pub fn filters(&self) -> &DomainFilters {
        &self.filters
    }

    pub fn filter_options(&self) -> FilterOptions {
        filter_options(&self.domains)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn extend_years(&self) -> u32 {
        self.extend_years
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
