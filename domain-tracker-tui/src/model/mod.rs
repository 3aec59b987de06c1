//! Model layer: application state
//!
//! The single source of truth for what is on screen. Plain data only; every
//! change goes through the update layer.
//!
//!     app.rs          App: page, session, status bar, page states, modal
//!     page.rs         Page: Login or Domains
//!     focus.rs        FocusPanel: table or search box
//!     state/          LoginState, DomainsState (wraps the core dashboard),
//!                     ModalState
//!
//! The domain records, filters, sort and form draft are not duplicated here:
//! they live in the core `DashboardState` held by `DomainsState`.

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use state::{DomainsState, FilterField, FormInput, LoginField, LoginState, Modal, ModalState};
