//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::{DefaultKeymap, typed_char};
use crate::message::{AppMessage, ContentMessage, LoginMessage, ModalMessage};
use crate::model::{App, FormInput, Modal, Page};

/// Wait up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize just needs the redraw the main loop does anyway
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.page {
        Page::Login => handle_login_keys(key, app),
        Page::Domains if app.focus.is_search() => handle_search_keys(key),
        Page::Domains => handle_domains_keys(key),
    }
}

// ========== Login ==========

fn handle_login_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.restoring {
        return AppMessage::Noop;
    }
    if DefaultKeymap::TOGGLE_SECRET.matches(&key) {
        return AppMessage::Login(LoginMessage::ToggleSecret);
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => LoginMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => LoginMessage::PrevField,
        KeyCode::Enter => LoginMessage::Submit,
        KeyCode::Backspace => LoginMessage::Backspace,
        KeyCode::Esc => return AppMessage::Quit,
        _ => match typed_char(&key) {
            Some(c) => LoginMessage::Input(c),
            None => return AppMessage::Noop,
        },
    };
    AppMessage::Login(msg)
}

// ========== Domains page ==========

fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearSearch);
    }

    let msg = match key.code {
        KeyCode::Esc => ContentMessage::ClearSearch,
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => ContentMessage::LeaveSearch,
        KeyCode::Backspace => ContentMessage::SearchBackspace,
        _ => match typed_char(&key) {
            Some(c) => ContentMessage::SearchInput(c),
            None => return AppMessage::Noop,
        },
    };
    AppMessage::Content(msg)
}

fn handle_domains_keys(key: KeyEvent) -> AppMessage {
    // Global
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || typed_char(&key) == Some('?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) || DefaultKeymap::REFRESH_F5.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }

    let msg = match key.code {
        KeyCode::Up => ContentMessage::SelectPrevious,
        KeyCode::Down => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Edit,
        KeyCode::Delete => ContentMessage::Delete,
        KeyCode::Esc => ContentMessage::ClearSearch,
        _ => match typed_char(&key) {
            Some(c) => match table_action(c) {
                Some(msg) => msg,
                None => return AppMessage::Noop,
            },
            None => return AppMessage::Noop,
        },
    };
    AppMessage::Content(msg)
}

fn table_action(c: char) -> Option<ContentMessage> {
    if let Some((_, field)) = DefaultKeymap::SORT_KEYS.iter().find(|(k, _)| *k == c) {
        return Some(ContentMessage::SortBy(*field));
    }

    let msg = match c {
        'k' => ContentMessage::SelectPrevious,
        'j' => ContentMessage::SelectNext,
        'g' => ContentMessage::SelectFirst,
        'G' => ContentMessage::SelectLast,
        DefaultKeymap::ACTION_ADD => ContentMessage::Add,
        DefaultKeymap::ACTION_REQUEST => ContentMessage::Request,
        DefaultKeymap::ACTION_EDIT => ContentMessage::Edit,
        DefaultKeymap::ACTION_DELETE => ContentMessage::Delete,
        DefaultKeymap::ACTION_EXTEND => ContentMessage::Extend,
        DefaultKeymap::ACTION_ARCHIVE => ContentMessage::ToggleArchive,
        DefaultKeymap::ACTION_FILTER => ContentMessage::OpenFilters,
        DefaultKeymap::ACTION_SEARCH => ContentMessage::FocusSearch,
        _ => return None,
    };
    Some(msg)
}

// ========== Modals ==========

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close
    if key.code == KeyCode::Esc || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(modal) = &app.modal.active else {
        return AppMessage::Noop;
    };

    let msg = match modal {
        Modal::DomainForm { focus, .. } => handle_form_keys(key, *focus),
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                Some(ModalMessage::Toggle)
            }
            KeyCode::Enter => Some(ModalMessage::Confirm),
            KeyCode::Char('n') => Some(ModalMessage::Close),
            _ => None,
        },
        Modal::Extend { .. } => match key.code {
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(ModalMessage::PrevOption),
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') => Some(ModalMessage::NextOption),
            KeyCode::Enter => Some(ModalMessage::Confirm),
            _ => None,
        },
        Modal::Filter { .. } => match key.code {
            KeyCode::Tab | KeyCode::Down => Some(ModalMessage::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(ModalMessage::PrevField),
            KeyCode::Left => Some(ModalMessage::PrevOption),
            KeyCode::Right | KeyCode::Char(' ') => Some(ModalMessage::NextOption),
            KeyCode::Char(DefaultKeymap::RESET_FILTERS) => Some(ModalMessage::ResetFilters),
            KeyCode::Enter | KeyCode::Char('f') => Some(ModalMessage::Confirm),
            _ => None,
        },
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => Some(ModalMessage::Close),
            _ => None,
        },
    };

    msg.map_or(AppMessage::Noop, AppMessage::Modal)
}

fn handle_form_keys(key: KeyEvent, focus: FormInput) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(ModalMessage::PrevField),
        KeyCode::Left => Some(ModalMessage::PrevOption),
        KeyCode::Right => Some(ModalMessage::NextOption),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Backspace => Some(ModalMessage::Backspace),
        KeyCode::Char(' ') if focus.is_checkbox() => Some(ModalMessage::Toggle),
        _ => typed_char(&key).map(ModalMessage::Input),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use domain_tracker_core::SortField;

    use super::*;
    use crate::model::FocusPanel;

    fn app(page: Page) -> App {
        let mut app = App::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        app.restoring = false;
        app.page = page;
        app
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app(Page::Domains);
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_event(ctrl_c.clone(), &app(Page::Login)), AppMessage::Quit));
        assert!(matches!(handle_event(ctrl_c, &app(Page::Domains)), AppMessage::Quit));
    }

    #[test]
    fn login_page_types_letters() {
        let app = app(Page::Login);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Login(LoginMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Login(LoginMessage::Submit)
        ));
        assert!(matches!(
            handle_event(with(KeyCode::Char('s'), KeyModifiers::ALT), &app),
            AppMessage::Login(LoginMessage::ToggleSecret)
        ));
    }

    #[test]
    fn login_ignores_keys_while_restoring() {
        let mut app = app(Page::Login);
        app.restoring = true;
        assert!(matches!(
            handle_event(press(KeyCode::Char('a')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn search_focus_captures_letters() {
        let mut app = app(Page::Domains);
        app.focus = FocusPanel::Search;
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Content(ContentMessage::SearchInput('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Content(ContentMessage::ClearSearch)
        ));
    }

    #[test]
    fn table_keys() {
        let app = app(Page::Domains);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('/')), &app),
            AppMessage::Content(ContentMessage::FocusSearch)
        ));
        assert!(matches!(
            handle_event(with(KeyCode::Char('A'), KeyModifiers::SHIFT), &app),
            AppMessage::Content(ContentMessage::ToggleArchive)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Content(ContentMessage::SortBy(SortField::ExpireDate))
        ));
        assert!(matches!(
            handle_event(with(KeyCode::Char('l'), KeyModifiers::ALT), &app),
            AppMessage::Logout
        ));
    }

    #[test]
    fn space_toggles_checkbox_but_types_in_text() {
        let mut app = app(Page::Domains);
        app.modal.show_form(String::new());
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Modal(ModalMessage::Input(' '))
        ));

        app.modal.active = Some(Modal::DomainForm {
            focus: FormInput::Archived,
            expire_text: String::new(),
        });
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Modal(ModalMessage::Toggle)
        ));
    }

    #[test]
    fn modal_takes_priority() {
        let mut app = app(Page::Domains);
        app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }
}
