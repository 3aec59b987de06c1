//! Modal update logic

use domain_tracker_core::types::KNOWN_COMPANIES;
use domain_tracker_core::{
    Action, DomainStatus, DraftEdit, FieldFilter, FormField, FormMode, FormState, StatusFilter,
    ValidationErrors, parse_renew_date, validate_draft,
};

use crate::message::{Command, ModalMessage};
use crate::model::{App, FilterField, FormInput, Modal};

/// Handle a modal message
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(modal) = &app.modal.active else {
        return None;
    };

    match modal {
        Modal::DomainForm { .. } => handle_domain_form(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Extend { .. } => handle_extend(app, msg),
        Modal::Filter { .. } => {
            handle_filter(app, msg);
            None
        }
        Modal::Help => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
            None
        }
    }
}

// ========== Domain form ==========

fn handle_domain_form(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let today = app.today;
    let FormState::Open {
        mode,
        draft,
        submitting,
        ..
    } = app.domains.dashboard().form()
    else {
        // Form already closed underneath us
        app.modal.close();
        return None;
    };
    let (mode, draft, submitting) = (*mode, draft.clone(), *submitting);
    let companies = company_options(app);

    let Some(Modal::DomainForm { focus, expire_text }) = &mut app.modal.active else {
        return None;
    };

    if submitting {
        return None;
    }

    let visible = FormInput::visible(mode, draft.archived);
    let edit = match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.domains.apply(Action::CloseForm, today);
            return None;
        }

        ModalMessage::Confirm => return submit_form(app),

        ModalMessage::NextField | ModalMessage::PrevField => {
            let forward = matches!(msg, ModalMessage::NextField);
            *focus = cycle(&visible, &*focus, forward);
            return None;
        }

        ModalMessage::Input(c) => match focus {
            FormInput::Name => DraftEdit::Name(format!("{}{c}", draft.name)),
            FormInput::ExpireDate => {
                expire_text.push(c);
                DraftEdit::ExpireDate(parse_renew_date(expire_text).ok().flatten())
            }
            FormInput::Company => DraftEdit::Company(format!("{}{c}", draft.company)),
            FormInput::Registrar => DraftEdit::Registrar(format!("{}{c}", draft.registrar)),
            FormInput::Resignation | FormInput::Archived => return None,
        },

        ModalMessage::Backspace => match focus {
            FormInput::Name => DraftEdit::Name(without_last(&draft.name)),
            FormInput::ExpireDate => {
                expire_text.pop();
                DraftEdit::ExpireDate(parse_renew_date(expire_text).ok().flatten())
            }
            FormInput::Company => DraftEdit::Company(without_last(&draft.company)),
            FormInput::Registrar => DraftEdit::Registrar(without_last(&draft.registrar)),
            FormInput::Resignation | FormInput::Archived => return None,
        },

        ModalMessage::Toggle | ModalMessage::PrevOption | ModalMessage::NextOption => {
            let forward = !matches!(msg, ModalMessage::PrevOption);
            match focus {
                FormInput::Resignation => DraftEdit::Resignation(!draft.resignation),
                FormInput::Archived => {
                    if !draft.archived {
                        expire_text.clear();
                    }
                    DraftEdit::Archived(!draft.archived)
                }
                FormInput::Company if !matches!(msg, ModalMessage::Toggle) => {
                    DraftEdit::Company(cycle(&companies, &draft.company, forward))
                }
                _ => return None,
            }
        }

        ModalMessage::ResetFilters => return None,
    };

    app.domains.apply(Action::EditDraft(edit), today);
    None
}

/// Validate the open form and turn it into a backend command.
fn submit_form(app: &mut App) -> Option<Command> {
    let today = app.today;
    let FormState::Open {
        mode,
        target_id,
        draft,
        ..
    } = app.domains.dashboard().form()
    else {
        return None;
    };
    let (mode, target_id, draft) = (*mode, target_id.clone(), draft.clone());

    let expire_text = match &app.modal.active {
        Some(Modal::DomainForm { expire_text, .. }) => expire_text.trim().to_string(),
        _ => String::new(),
    };

    let mut errors = validate_draft(&draft, mode).err().unwrap_or_default();
    let date_shown = mode != FormMode::Request && !draft.archived;
    if date_shown && !expire_text.is_empty() && draft.expire_date.is_none() {
        errors.insert(FormField::ExpireDate, "Invalid date, use YYYY-MM-DD");
    }
    if !errors.is_empty() {
        log::debug!("Form rejected: {errors}");
        app.domains.apply(Action::FormInvalid(errors), today);
        return None;
    }

    let command = match (mode, target_id) {
        (FormMode::Edit, Some(id)) => Command::UpdateDomain { id, draft },
        (FormMode::Edit, None) => {
            log::warn!("Edit form open without a target");
            app.domains
                .apply(Action::FormInvalid(ValidationErrors::default()), today);
            return None;
        }
        (mode, _) => Command::CreateDomain { draft, mode },
    };

    app.domains.apply(Action::FormSubmitting, today);
    app.set_status("Saving...");
    Some(command)
}

/// Well-known companies first, then the ones already in use.
fn company_options(app: &App) -> Vec<String> {
    let mut options: Vec<String> = KNOWN_COMPANIES.iter().map(ToString::to_string).collect();
    for company in app.domains.dashboard().filter_options().companies {
        if !options.contains(&company) {
            options.push(company);
        }
    }
    options
}

fn without_last(text: &str) -> String {
    let mut text = text.to_string();
    text.pop();
    text
}

// ========== Delete confirmation ==========

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let today = app.today;
    let Some(Modal::ConfirmDelete {
        confirm_focused, ..
    }) = &mut app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.domains.apply(Action::CancelDelete, today);
            None
        }

        ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::NextOption
        | ModalMessage::PrevOption
        | ModalMessage::Toggle => {
            *confirm_focused = !*confirm_focused;
            None
        }

        ModalMessage::Confirm => {
            let confirmed = *confirm_focused;
            app.modal.close();
            let id = app.domains.dashboard().pending_delete().map(str::to_string);
            match id {
                Some(id) if confirmed => {
                    app.set_status("Deleting...");
                    Some(Command::DeleteDomain { id })
                }
                _ => {
                    app.domains.apply(Action::CancelDelete, today);
                    None
                }
            }
        }

        ModalMessage::Input(_) | ModalMessage::Backspace | ModalMessage::ResetFilters => None,
    }
}

// ========== Extend ==========

fn handle_extend(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let today = app.today;
    let Some(Modal::Extend { domain_id }) = &app.modal.active else {
        return None;
    };
    let domain_id = domain_id.clone();

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::PrevOption | ModalMessage::PrevField => {
            app.domains.apply(Action::DecreaseExtendYears, today);
        }
        ModalMessage::NextOption | ModalMessage::NextField => {
            app.domains.apply(Action::IncreaseExtendYears, today);
        }
        ModalMessage::Confirm => {
            app.modal.close();
            let years = app.domains.dashboard().extend_years();
            let Some(domain) = app.domains.dashboard().domain(&domain_id).cloned() else {
                app.set_error(format!("Domain not found: {domain_id}"));
                return None;
            };
            app.set_status(format!("Extending {} by {years} year(s)...", domain.name));
            return Some(Command::ExtendDomain { domain, years });
        }
        ModalMessage::Toggle
        | ModalMessage::Input(_)
        | ModalMessage::Backspace
        | ModalMessage::ResetFilters => {}
    }
    None
}

// ========== Filters ==========

fn handle_filter(app: &mut App, msg: ModalMessage) {
    let today = app.today;
    let Some(Modal::Filter { focus }) = &mut app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::NextField => *focus = focus.next(),
        ModalMessage::PrevField => *focus = focus.prev(),
        ModalMessage::ResetFilters => app.domains.apply(Action::ResetFilters, today),
        ModalMessage::NextOption | ModalMessage::PrevOption | ModalMessage::Toggle => {
            let forward = !matches!(msg, ModalMessage::PrevOption);
            let field = *focus;
            let dashboard = app.domains.dashboard();
            let filters = dashboard.filters();
            let options = dashboard.filter_options();

            let action = match field {
                FilterField::Status => {
                    let statuses: Vec<StatusFilter> = std::iter::once(StatusFilter::All)
                        .chain(DomainStatus::ALL.into_iter().map(StatusFilter::Only))
                        .collect();
                    Action::SetStatusFilter(cycle(&statuses, &filters.status, forward))
                }
                FilterField::Company => Action::SetCompanyFilter(cycle(
                    &field_choices(options.companies),
                    &filters.company,
                    forward,
                )),
                FilterField::Registrar => Action::SetRegistrarFilter(cycle(
                    &field_choices(options.registrars),
                    &filters.registrar,
                    forward,
                )),
            };
            app.domains.apply(action, today);
        }
        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
}

fn field_choices(values: Vec<String>) -> Vec<FieldFilter> {
    std::iter::once(FieldFilter::All)
        .chain(values.into_iter().map(FieldFilter::Exact))
        .collect()
}

/// Step through `options` from `current`. A value that is not in the list
/// starts from the first (or last, going back) option.
fn cycle<T: Clone + PartialEq>(options: &[T], current: &T, forward: bool) -> T {
    let len = options.len();
    if len == 0 {
        return current.clone();
    }
    let position = options.iter().position(|o| o == current);
    let index = match (position, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    options[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_both_ways() {
        let options = [1, 2, 3];
        assert_eq!(cycle(&options, &3, true), 1);
        assert_eq!(cycle(&options, &1, false), 3);
        assert_eq!(cycle(&options, &2, true), 3);
    }

    #[test]
    fn cycle_from_unknown_value() {
        let options = ["a".to_string(), "b".to_string()];
        assert_eq!(cycle(&options, &String::new(), true), "a");
        assert_eq!(cycle(&options, &String::new(), false), "b");
        assert_eq!(cycle(&[] as &[String], &"x".to_string(), true), "x");
    }
}
