//! Event layer: input handling
//!
//! Turns terminal events into messages. Nothing here changes state.
//!
//!     handler.rs      poll_event, handle_event
//!     keymap.rs       key bindings
//!
//! Key routing, first match wins:
//!     1. an open modal gets every key
//!     2. Ctrl+C quits from anywhere
//!     3. login page: typing goes into the form
//!     4. search box focused: typing goes into the search
//!     5. global keys (quit, help, refresh, logout), then table keys
//!
//! Only `Press` events are handled; `Release` and `Repeat` are dropped so
//! terminals that report both do not double every key.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
