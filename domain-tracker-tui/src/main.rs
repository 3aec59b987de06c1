//! Domain Tracker TUI
//!
//! Terminal dashboard for the company's domain registrations.
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: messages and backend commands (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: API calls on a tokio runtime (`backend/`)
//!
//! Startup order: config, file logging, theme, backend, then the terminal.
//! Anything that fails before the terminal is in raw mode is printed
//! normally by `anyhow`.

mod app;
mod backend;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use chrono::Local;

use backend::{AppConfig, Backend};
use message::Command;
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    let _log_guard = logging::init(&config)?;
    view::theme::set_theme(config.theme);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api = %config.api_base_url,
        "Starting domain tracker"
    );

    let backend = Backend::new(&config)?;
    let mut app = model::App::new(Local::now().date_naive());
    backend.dispatch(Command::RestoreSession);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend);
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(()) => tracing::info!("Exited"),
        Err(e) => tracing::error!("Exited with error: {e:#}"),
    }
    result
}
