//! Domains page update logic
//!
//! Table navigation, row actions, search and sort.

use domain_tracker_core::{Action, DomainRow, FormMode, format_renew_date};

use crate::message::{Command, ContentMessage};
use crate::model::{App, FocusPanel};

const READ_ONLY: &str = "You do not have permission to change domains";

/// Handle a domains page message
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let today = app.today;

    match msg {
        // ========== Navigation ==========
        ContentMessage::SelectPrevious => app.domains.select_previous(),
        ContentMessage::SelectNext => app.domains.select_next(today),
        ContentMessage::SelectFirst => app.domains.select_first(),
        ContentMessage::SelectLast => app.domains.select_last(today),

        // ========== Row actions ==========
        ContentMessage::Add => open_form(app, FormMode::Add, None),
        ContentMessage::Request => open_form(app, FormMode::Request, None),
        ContentMessage::Edit => {
            if let Some(row) = app.domains.selected_row(today) {
                open_form(app, FormMode::Edit, Some(row));
            }
        }
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::Extend => handle_extend(app),
        ContentMessage::ToggleArchive => return handle_toggle_archive(app),
        ContentMessage::OpenFilters => app.modal.show_filter(),

        // ========== Search ==========
        ContentMessage::FocusSearch => app.focus = FocusPanel::Search,
        ContentMessage::LeaveSearch => app.focus = FocusPanel::Table,
        ContentMessage::SearchInput(c) => {
            let mut search = app.domains.dashboard().search().to_string();
            search.push(c);
            app.domains.apply(Action::SetSearch(search), today);
        }
        ContentMessage::SearchBackspace => {
            let mut search = app.domains.dashboard().search().to_string();
            if search.pop().is_some() {
                app.domains.apply(Action::SetSearch(search), today);
            }
        }
        ContentMessage::ClearSearch => {
            app.domains.apply(Action::SetSearch(String::new()), today);
            app.focus = FocusPanel::Table;
        }

        // ========== Sort ==========
        ContentMessage::SortBy(field) => {
            app.domains.apply(Action::ToggleSort(field), today);
        }
    }

    None
}

/// Selected row, if the user may change it.
fn editable_row(app: &mut App) -> Option<DomainRow> {
    if !app.can_edit() {
        app.set_error(READ_ONLY);
        return None;
    }
    app.domains.selected_row(app.today)
}

fn open_form(app: &mut App, mode: FormMode, row: Option<DomainRow>) {
    if !app.can_edit() {
        app.set_error(READ_ONLY);
        return;
    }

    let target = row.map(|r| r.domain);
    let expire_text = target
        .as_ref()
        .map(|d| format_renew_date(d.expire_date))
        .unwrap_or_default();

    app.domains.apply(Action::OpenForm { mode, target }, app.today);
    app.modal.show_form(expire_text);
    app.clear_status();
}

fn handle_delete(app: &mut App) {
    let Some(row) = editable_row(app) else {
        return;
    };
    app.domains
        .apply(Action::RequestDelete(row.domain.id.clone()), app.today);
    app.modal.show_confirm_delete(row.domain.name);
}

fn handle_extend(app: &mut App) {
    let Some(row) = editable_row(app) else {
        return;
    };
    if row.domain.archived || row.domain.expire_date.is_none() {
        app.set_error("Only domains with an expiry date can be extended");
        return;
    }
    app.modal.show_extend(row.domain.id);
}

fn handle_toggle_archive(app: &mut App) -> Option<Command> {
    let row = editable_row(app)?;
    let archived = !row.domain.archived;
    app.set_status(if archived {
        format!("Archiving {}...", row.domain.name)
    } else {
        format!("Restoring {}...", row.domain.name)
    });
    Some(Command::SetArchived {
        domain: row.domain,
        archived,
    })
}
