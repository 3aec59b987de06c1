//! Login page

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, LoginField};
use crate::view::layout::centered_rect;
use crate::view::theme::{Styles, colors};

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 12;
/// Left padding of input values inside the form
const INPUT_INDENT: &str = "  ";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    let block = Block::default()
        .title(" Domain Tracker ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    if app.restoring {
        let waiting = Paragraph::new(vec![
            Line::from(""),
            Line::styled("Checking stored session...", Styles::label()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(waiting, inner);
        return;
    }

    let login = &app.login;
    let editing = !login.submitting;
    let email_focused = editing && login.focus == LoginField::Email;
    let password_focused = editing && login.focus == LoginField::Password;

    let password_text = if login.show_password {
        login.password.clone()
    } else {
        "•".repeat(login.password.chars().count())
    };

    let mut lines = vec![
        Line::styled("Email", Styles::label()),
        Line::styled(format!("{INPUT_INDENT}{}", login.email), Styles::input(email_focused)),
        Line::from(""),
        Line::styled("Password", Styles::label()),
        Line::styled(format!("{INPUT_INDENT}{password_text}"), Styles::input(password_focused)),
        Line::from(""),
    ];

    if login.submitting {
        lines.push(Line::styled("Signing in...", Style::default().fg(colors().warning)));
    } else if let Some(err) = &login.error {
        lines.push(Line::from(Span::styled(format!("⚠ {err}"), Styles::error())));
    }

    let content = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines), content);

    // Terminal cursor at the end of the focused input
    let (text, row) = match login.focus {
        LoginField::Email => (login.email.as_str(), 1),
        LoginField::Password => (password_text.as_str(), 4),
    };
    if editing {
        let offset = (INPUT_INDENT.width() + text.width()).min(usize::from(content.width));
        let x = content.x + u16::try_from(offset).unwrap_or(content.width);
        frame.set_cursor_position((x, content.y + row));
    }
}
