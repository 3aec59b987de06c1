//! View layer: rendering
//!
//! Reads the model, never changes it.
//!
//!     layout.rs       title bar, page area, status bar, modal overlay
//!     theme.rs        colors and styles
//!     components/     status bar, modals
//!     pages/          login form, domain table

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
