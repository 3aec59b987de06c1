//! Main loop
//!
//! ```text
//! loop {
//!     draw
//!     quit?
//!     key press  ──▶ handle_event ──▶ update ──▶ dispatch any Command
//!     backend events drained ──▶ update ──▶ dispatch any Command
//! }
//! ```
//!
//! The poll timeout doubles as the tick: backend results are picked up at
//! most 100ms after they arrive, and `today` is re-read each pass so the
//! expiry classification rolls over at midnight.

use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK: Duration = Duration::from_millis(100);

pub fn run(terminal: &mut Term, app: &mut App, backend: &Backend) -> Result<()> {
    loop {
        app.today = Local::now().date_naive();

        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            if let Some(command) = update::update(app, msg) {
                backend.dispatch(command);
            }
        }

        while let Some(event) = backend.try_recv() {
            if let Some(command) = update::update(app, AppMessage::Backend(event)) {
                backend.dispatch(command);
            }
        }
    }

    Ok(())
}
