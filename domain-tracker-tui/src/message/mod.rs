//! Message layer
//!
//! Bridges Event and Update: every key press and every backend completion is
//! turned into an [`AppMessage`], and [`update`](crate::update::update) is the
//! only consumer.
//!
//! ```text
//!   key press ──▶ event::handle_event ──┐
//!                                       ├──▶ AppMessage ──▶ update ──▶ Option<Command>
//!   backend task ──▶ BackendEvent ──────┘                                   │
//!        ▲                                                                  │
//!        └──────────────────────── backend::Backend::dispatch ◀─────────────┘
//! ```
//!
//! Sub-messages are split by where the key was pressed:
//!     login.rs            login form
//!     content.rs          domain table, search box
//!     modal.rs            open modal
//!     backend.rs          results coming back from the backend runtime
//!     command.rs          work the update layer asks the backend to do

mod app;
mod backend;
mod command;
mod content;
mod login;
mod modal;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use command::Command;
pub use content::ContentMessage;
pub use login::LoginMessage;
pub use modal::ModalMessage;
