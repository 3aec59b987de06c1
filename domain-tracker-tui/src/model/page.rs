//! Page routing

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Credentials form, shown until a session exists
    #[default]
    Login,
    /// Domain table
    Domains,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Domains => "Domains",
        }
    }
}
