//! Top-level message enum

use super::{BackendEvent, ContentMessage, LoginMessage, ModalMessage};

/// Top-level message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Leave the application
    Quit,

    /// Login form messages
    Login(LoginMessage),

    /// Domain table messages
    Content(ContentMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// A backend task finished
    Backend(BackendEvent),

    /// Reload the working set
    Refresh,

    /// End the session and return to the login screen
    Logout,

    ShowHelp,

    /// Ignored input
    Noop,
}
