//! Login form messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMessage {
    NextField,
    PrevField,
    Input(char),
    Backspace,
    /// Show or hide the password
    ToggleSecret,
    Submit,
}
