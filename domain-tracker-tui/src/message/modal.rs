//! Modal messages

/// Modal messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Close the modal
    Close,

    /// Next input field
    NextField,

    /// Previous input field
    PrevField,

    /// Previous option of a picker (←)
    PrevOption,

    /// Next option of a picker (→)
    NextOption,

    /// Flip a checkbox (Space)
    Toggle,

    /// Confirm / submit
    Confirm,

    /// Type a character
    Input(char),

    /// Delete a character (Backspace)
    Backspace,

    /// Clear every filter
    ResetFilters,
}
