//! Domains page state
//!
//! Wraps the core [`DashboardState`] with the table cursor. The dashboard is
//! only changed through [`DomainsState::apply`], which keeps the cursor inside
//! the visible rows.

use chrono::NaiveDate;
use domain_tracker_core::{Action, DashboardState, DomainRow};

/// Domains page state
#[derive(Debug, Default)]
pub struct DomainsState {
    dashboard: DashboardState,
    /// Cursor into the derived rows
    pub selected: usize,
}

impl DomainsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Apply a store action and clamp the cursor.
    pub fn apply(&mut self, action: Action, today: NaiveDate) {
        self.dashboard.apply(action);
        self.clamp(today);
    }

    pub fn rows(&self, today: NaiveDate) -> Vec<DomainRow> {
        self.dashboard.rows(today)
    }

    /// Row under the cursor.
    pub fn selected_row(&self, today: NaiveDate) -> Option<DomainRow> {
        self.rows(today).into_iter().nth(self.selected)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, today: NaiveDate) {
        let len = self.rows(today).len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, today: NaiveDate) {
        self.selected = self.rows(today).len().saturating_sub(1);
    }

    fn clamp(&mut self, today: NaiveDate) {
        let len = self.rows(today).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
