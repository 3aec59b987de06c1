//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use domain_tracker_core::SortField;

/// Key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether `key` triggers this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const REFRESH_F5: KeyBinding = KeyBinding::key(KeyCode::F(5));
    pub const LOGOUT: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // Login
    pub const TOGGLE_SECRET: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));

    // Search
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    // Table actions (plain letters)
    pub const ACTION_ADD: char = 'a';
    pub const ACTION_REQUEST: char = 'r';
    pub const ACTION_EDIT: char = 'e';
    pub const ACTION_DELETE: char = 'd';
    pub const ACTION_EXTEND: char = 'x';
    pub const ACTION_ARCHIVE: char = 'A';
    pub const ACTION_FILTER: char = 'f';
    pub const ACTION_SEARCH: char = '/';

    // Filter dialog
    pub const RESET_FILTERS: char = 'r';

    /// Number keys sort by the matching table column.
    pub const SORT_KEYS: [(char, SortField); 6] = [
        ('1', SortField::Id),
        ('2', SortField::Name),
        ('3', SortField::ExpireDate),
        ('4', SortField::Company),
        ('5', SortField::Registrar),
        ('6', SortField::Status),
    ];
}

/// Printable character typed without Ctrl or Alt.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_requires_exact_modifiers() {
        let alt_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::ALT);
        let plain_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(DefaultKeymap::REFRESH.matches(&alt_r));
        assert!(!DefaultKeymap::REFRESH.matches(&plain_r));
    }

    #[test]
    fn typed_char_allows_shift_only() {
        let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(typed_char(&upper), Some('A'));
        assert_eq!(typed_char(&ctrl), None);
        assert_eq!(typed_char(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), None);
    }
}
