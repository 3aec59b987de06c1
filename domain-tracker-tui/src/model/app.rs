//! Application state

use chrono::NaiveDate;
use domain_tracker_core::Session;
use domain_tracker_core::types::PERMISSION_DOMAINS;

use super::{DomainsState, FocusPanel, LoginState, ModalState, Page};

/// Status bar notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Application state
pub struct App {
    /// Leave the main loop
    pub should_quit: bool,

    pub page: Page,

    /// Table or search box, on the domains page
    pub focus: FocusPanel,

    /// Logged-in session, `None` on the login page
    pub session: Option<Session>,

    // === Page state ===
    pub login: LoginState,
    pub domains: DomainsState,

    pub modal: ModalState,

    pub status_message: Option<StatusMessage>,

    /// Calendar date used for classification, refreshed every tick
    pub today: NaiveDate,

    /// The stored session is still being read
    pub restoring: bool,
}

impl App {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            should_quit: false,
            page: Page::Login,
            focus: FocusPanel::Table,
            session: None,
            login: LoginState::new(),
            domains: DomainsState::new(),
            modal: ModalState::new(),
            status_message: None,
            today,
            restoring: true,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether the user may create, edit, archive and delete.
    pub fn can_edit(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.has_permission(PERMISSION_DOMAINS))
    }

    /// Name for the title bar.
    pub fn user_name(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .map(domain_tracker_core::User::display_name)
    }
}
