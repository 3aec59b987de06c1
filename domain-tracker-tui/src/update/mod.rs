//! Update layer: state transitions
//!
//! The only place that changes the [`App`]. Each message is handled
//! synchronously; when it needs the backend, [`update`] returns the
//! [`Command`] to run and the main loop dispatches it. Results come back later
//! as [`AppMessage::Backend`].
//!
//!     login.rs        login form editing and submit
//!     content.rs      table navigation, row actions, search, sort
//!     modal.rs        form, delete confirmation, extend, filters, help
//!     backend.rs      completions of backend commands
//!
//! Failures follow one taxonomy (see [`report_error`]): an expired session
//! returns to the login page silently, everything else is a status bar
//! notification with the working set left untouched. Form validation errors
//! are shown inline and never reach the backend.

mod backend;
mod content;
mod login;
mod modal;

use domain_tracker_core::{Action, CoreError, Session};

use crate::message::{AppMessage, Command};
use crate::model::{App, FocusPanel, Page};

/// Handle one message. Returns the backend work it triggers, if any.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Login(login_msg) => login::update(app, login_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::Refresh => {
            if app.page != Page::Domains || app.domains.dashboard().is_loading() {
                return None;
            }
            app.domains.apply(Action::Loading, app.today);
            app.set_status("Refreshing...");
            Some(Command::LoadDomains)
        }

        AppMessage::Logout => app.session.is_some().then_some(Command::Logout),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}

/// Switch to the domains page and load the working set.
fn enter_dashboard(app: &mut App, session: Session) -> Command {
    app.session = Some(session);
    app.page = Page::Domains;
    app.focus = FocusPanel::Table;
    app.login.password.clear();
    app.login.submitting = false;
    app.login.error = None;
    app.domains.apply(Action::Loading, app.today);
    Command::LoadDomains
}

/// Drop everything tied to the session and show the login page.
fn end_session(app: &mut App) {
    app.session = None;
    app.page = Page::Login;
    app.focus = FocusPanel::Table;
    app.modal.close();
    app.domains.apply(Action::SessionEnded, app.today);
    app.domains.select_first();
    app.login.reset();
    app.clear_status();
}

/// Route a failed backend call.
fn report_error(app: &mut App, err: &CoreError) {
    match err {
        CoreError::SessionExpired | CoreError::NotAuthenticated => {
            log::info!("Session ended: {err}");
            end_session(app);
        }
        _ => {
            if err.is_expected() {
                log::warn!("{err}");
            } else {
                log::error!("{err}");
            }
            app.set_error(err.to_string());
        }
    }
}
