//! Modal state
//!
//! Form contents, the pending delete id and the extend-years counter live in
//! the core dashboard; a modal only carries what is purely presentational
//! (focus, the raw date text while it is being typed).

use domain_tracker_core::FormMode;

/// Inputs of the domain form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Name,
    ExpireDate,
    Company,
    Registrar,
    Resignation,
    Archived,
}

impl FormInput {
    /// Inputs shown for `mode`. Archived records have no expiry date and
    /// cannot be flagged for resignation.
    pub fn visible(mode: FormMode, archived: bool) -> Vec<FormInput> {
        let mut inputs = vec![FormInput::Name];
        if mode != FormMode::Request && !archived {
            inputs.push(FormInput::ExpireDate);
        }
        inputs.push(FormInput::Company);
        inputs.push(FormInput::Registrar);
        if mode != FormMode::Request {
            if !archived {
                inputs.push(FormInput::Resignation);
            }
            inputs.push(FormInput::Archived);
        }
        inputs
    }

    pub fn label(self) -> &'static str {
        match self {
            FormInput::Name => "Domain",
            FormInput::ExpireDate => "Expires (YYYY-MM-DD)",
            FormInput::Company => "Company",
            FormInput::Registrar => "Registrar",
            FormInput::Resignation => "Resignation",
            FormInput::Archived => "Archived",
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FormInput::Resignation | FormInput::Archived)
    }
}

/// Pickers of the filter dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Status,
    Company,
    Registrar,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Status, FilterField::Company, FilterField::Registrar];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Status => "Status",
            FilterField::Company => "Company",
            FilterField::Registrar => "Registrar",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FilterField::Status => FilterField::Company,
            FilterField::Company => FilterField::Registrar,
            FilterField::Registrar => FilterField::Status,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterField::Status => FilterField::Registrar,
            FilterField::Company => FilterField::Status,
            FilterField::Registrar => FilterField::Company,
        }
    }
}

/// Modal variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Add, request or edit form; draft and errors are in the dashboard
    DomainForm {
        focus: FormInput,
        /// Expiry date as typed, parsed on every change
        expire_text: String,
    },

    /// Delete confirmation; the id is the dashboard's pending delete
    ConfirmDelete {
        name: String,
        /// `true` when the Delete button is focused
        confirm_focused: bool,
    },

    /// Extend the expiry date by the dashboard's extend-years counter
    Extend { domain_id: String },

    /// Status / company / registrar pickers
    Filter { focus: FilterField },

    Help,
}

/// Modal container
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_form(&mut self, expire_text: String) {
        self.active = Some(Modal::DomainForm {
            focus: FormInput::Name,
            expire_text,
        });
    }

    pub fn show_confirm_delete(&mut self, name: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            name: name.into(),
            confirm_focused: false,
        });
    }

    pub fn show_extend(&mut self, domain_id: impl Into<String>) {
        self.active = Some(Modal::Extend {
            domain_id: domain_id.into(),
        });
    }

    pub fn show_filter(&mut self) {
        self.active = Some(Modal::Filter {
            focus: FilterField::default(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
