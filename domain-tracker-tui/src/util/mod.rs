//! Util layer: terminal setup
//!
//! Raw mode plus the alternate screen while the UI runs, and the way back.
//! `restore_terminal` must run whether the main loop ended cleanly or not,
//! otherwise the shell is left without echo.

mod terminal;

pub use terminal::{Term, init_terminal, restore_terminal};
