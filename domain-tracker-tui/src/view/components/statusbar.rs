//! Bottom status bar

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, Modal, Page};
use crate::view::theme::{Styles, colors};

/// Draw key hints, then the current notification
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        let style = if msg.is_error {
            Style::default()
                .fg(colors().error)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(msg.text.clone(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// Key hints for the current context
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if let Some(modal) = &app.modal.active {
        return match modal {
            Modal::DomainForm { .. } => vec![
                ("Tab", "Next"),
                ("←→", "Pick"),
                ("Space", "Toggle"),
                ("Enter", "Save"),
                ("Esc", "Cancel"),
            ],
            Modal::ConfirmDelete { .. } => vec![("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")],
            Modal::Extend { .. } => vec![("←→", "Years"), ("Enter", "Extend"), ("Esc", "Cancel")],
            Modal::Filter { .. } => vec![
                ("↑↓", "Filter"),
                ("←→", "Value"),
                ("r", "Reset"),
                ("Enter", "Done"),
            ],
            Modal::Help => vec![("Esc", "Close")],
        };
    }

    match app.page {
        Page::Login if app.restoring => vec![("Ctrl+c", "Quit")],
        Page::Login => vec![
            ("Tab", "Next"),
            ("Alt+s", "Show password"),
            ("Enter", "Sign in"),
            ("Esc", "Quit"),
        ],
        Page::Domains if app.focus.is_search() => {
            vec![("Enter", "Done"), ("Esc", "Clear"), ("Ctrl+u", "Clear")]
        }
        Page::Domains => {
            let mut hints = vec![("↑↓", "Select"), ("/", "Search"), ("f", "Filter"), ("1-6", "Sort")];
            if app.can_edit() {
                hints.extend([
                    ("a", "Add"),
                    ("r", "Request"),
                    ("e", "Edit"),
                    ("x", "Extend"),
                    ("A", "Archive"),
                    ("d", "Delete"),
                ]);
            }
            hints.extend([("?", "Help"), ("q", "Quit")]);
            hints
        }
    }
}
