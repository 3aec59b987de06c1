//! Backend completion handling
//!
//! Applies the outcome of a finished [`Command`](crate::message::Command).
//! Successful writes go into the working set only here, after the backend has
//! confirmed them.

use domain_tracker_core::{Action, ApiError, CoreError, CoreResult, Domain};

use super::{end_session, enter_dashboard, report_error};
use crate::message::{BackendEvent, Command};
use crate::model::App;

/// Handle a backend event
pub fn update(app: &mut App, event: BackendEvent) -> Option<Command> {
    let today = app.today;

    match event {
        BackendEvent::SessionRestored(session) => {
            app.restoring = false;
            let session = session?;
            log::info!("Restored stored session");
            return Some(enter_dashboard(app, session));
        }

        BackendEvent::LoggedIn(Ok(session)) => {
            let command = enter_dashboard(app, session);
            if let Some(name) = app.user_name() {
                app.set_status(format!("Signed in as {name}"));
            }
            return Some(command);
        }

        BackendEvent::LoggedIn(Err(e)) => {
            log::warn!("Login failed: {e}");
            app.login.submitting = false;
            app.login.password.clear();
            app.login.error = Some(login_error_text(&e));
        }

        BackendEvent::LoggedOut => {
            end_session(app);
            app.set_status("Signed out");
        }

        BackendEvent::DomainsLoaded(Ok(domains)) => {
            let count = domains.len();
            app.domains.apply(Action::Loaded(domains), today);
            app.set_status(format!("{count} domains"));
        }

        BackendEvent::DomainsLoaded(Err(e)) => {
            app.domains.apply(Action::LoadFailed(e.to_string()), today);
            report_error(app, &e);
        }

        BackendEvent::DomainCreated(result) => {
            form_saved(app, result, Action::Created, "Added");
        }

        BackendEvent::DomainSaved(result) => {
            form_saved(app, result, Action::Replaced, "Saved");
        }

        BackendEvent::DomainUpdated(Ok(domain)) => {
            app.set_status(format!("Updated {}", domain.name));
            app.domains.apply(Action::Replaced(domain), today);
        }

        BackendEvent::DomainUpdated(Err(e)) => report_error(app, &e),

        BackendEvent::DomainDeleted { id, result: Ok(()) } => {
            app.domains.apply(Action::Removed(id), today);
            app.set_status("Domain deleted");
        }

        BackendEvent::DomainDeleted { result: Err(e), .. } => {
            app.domains.apply(Action::CancelDelete, today);
            report_error(app, &e);
        }
    }

    None
}

/// Result of an add, request or edit form submit.
fn form_saved(
    app: &mut App,
    result: CoreResult<Domain>,
    action: fn(Domain) -> Action,
    verb: &str,
) {
    let today = app.today;
    match result {
        Ok(domain) => {
            app.set_status(format!("{verb} {}", domain.name));
            app.domains.apply(action(domain), today);
            app.domains.apply(Action::CloseForm, today);
            app.modal.close();
        }
        Err(CoreError::Validation(errors)) => {
            app.domains.apply(Action::FormInvalid(errors), today);
            app.clear_status();
        }
        Err(e @ (CoreError::SessionExpired | CoreError::NotAuthenticated)) => report_error(app, &e),
        Err(e) => {
            app.domains.apply(Action::FormFailed(e.to_string()), today);
            report_error(app, &e);
        }
    }
}

fn login_error_text(err: &CoreError) -> String {
    match err {
        CoreError::Api(ApiError::Unauthorized { .. }) => "Invalid email or password".to_string(),
        CoreError::NotAuthenticated => "Enter your email and password".to_string(),
        other => other.to_string(),
    }
}
