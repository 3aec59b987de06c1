//! Domain table messages
//!
//! List navigation, row actions, search box editing and sorting.

use domain_tracker_core::SortField;

/// Domain table messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== List navigation ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== Row actions ==========
    /// Register an existing domain
    Add,
    /// File a request for a new domain
    Request,
    /// Edit the selected row
    Edit,
    /// Ask to delete the selected row
    Delete,
    /// Open the extend dialog for the selected row
    Extend,
    /// Archive or restore the selected row
    ToggleArchive,

    // ========== Filtering ==========
    OpenFilters,
    /// Move focus into the search box
    FocusSearch,
    /// Move focus back to the table, keeping the query
    LeaveSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // ========== Sorting ==========
    SortBy(SortField),
}
