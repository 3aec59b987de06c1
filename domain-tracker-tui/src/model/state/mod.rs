//! Page state
//!
//! Data containers for each page and for the modal layer.

mod domains;
mod login;
mod modal;

pub use domains::DomainsState;
pub use login::{LoginField, LoginState};
pub use modal::{FilterField, FormInput, Modal, ModalState};
