//! Focus on the domains page

/// Where key presses go when no modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Row navigation and actions
    #[default]
    Table,
    /// Typing goes into the search box
    Search,
}

impl FocusPanel {
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }
}
