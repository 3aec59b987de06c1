//! Modal dialogs

use domain_tracker_core::{
    DomainDraft, FormField, FormMode, FormState, StatusFilter, ValidationErrors, format_renew_date,
};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::{App, FilterField, FormInput, Modal};
use crate::view::layout::centered_rect;
use crate::view::theme::{Styles, colors};

/// Draw the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::DomainForm { focus, expire_text } => render_domain_form(app, frame, *focus, expire_text),
        Modal::ConfirmDelete {
            name,
            confirm_focused,
        } => render_confirm_delete(frame, name, *confirm_focused),
        Modal::Extend { domain_id } => render_extend(app, frame, domain_id),
        Modal::Filter { focus } => render_filter(app, frame, *focus),
        Modal::Help => render_help(frame),
    }
}

/// Clear `area`, draw a titled border and return the padded inside.
fn frame_modal(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn key_hint(key: &'static str, desc: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Styles::hint_key()),
        Span::styled(format!(" {desc}  "), Styles::label()),
    ]
}

// ========== Domain form ==========

fn render_domain_form(app: &App, frame: &mut Frame, focus: FormInput, expire_text: &str) {
    let FormState::Open {
        mode,
        draft,
        errors,
        submitting,
        ..
    } = app.domains.dashboard().form()
    else {
        return;
    };

    let title = match mode {
        FormMode::Add => "Add domain",
        FormMode::Request => "Request domain",
        FormMode::Edit => "Edit domain",
    };

    let inputs = FormInput::visible(*mode, draft.archived);
    let mut lines = Vec::new();
    for input in &inputs {
        let focused = !submitting && *input == focus;
        if input.is_checkbox() {
            lines.push(checkbox_line(*input, draft, focused));
        } else {
            lines.extend(text_input_lines(*input, draft, expire_text, errors, focused));
        }
    }

    lines.push(Line::from(""));
    if *submitting {
        lines.push(Line::styled("Saving...", Style::default().fg(colors().warning)));
    } else {
        let mut hints = Vec::new();
        hints.extend(key_hint("Tab", "Next"));
        hints.extend(key_hint("Enter", "Save"));
        hints.extend(key_hint("Esc", "Cancel"));
        lines.push(Line::from(hints));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(3);
    let area = centered_rect(60, height, frame.area());
    let inner = frame_modal(frame, area, title, colors().border_focused);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn text_input_lines(
    input: FormInput,
    draft: &DomainDraft,
    expire_text: &str,
    errors: &ValidationErrors,
    focused: bool,
) -> Vec<Line<'static>> {
    let error = match input {
        FormInput::Name => errors.get(FormField::Name),
        FormInput::ExpireDate => errors.get(FormField::ExpireDate),
        FormInput::Company => errors.get(FormField::Company),
        _ => None,
    };

    let mut label = vec![Span::styled(input.label(), Styles::label())];
    if input == FormInput::Company && focused {
        label.push(Span::styled("  ←→ to pick", Style::default().fg(Color::DarkGray)));
    }

    let value = match input {
        FormInput::Name => draft.name.as_str(),
        FormInput::ExpireDate => expire_text,
        FormInput::Company => draft.company.as_str(),
        _ => draft.registrar.as_str(),
    };
    let shown = if focused {
        format!("  {value}▎")
    } else if value.is_empty() {
        "  -".to_string()
    } else {
        format!("  {value}")
    };

    let mut lines = vec![Line::from(label), Line::styled(shown, Styles::input(focused))];
    match error {
        Some(message) => lines.push(Line::styled(format!("  ⚠ {message}"), Styles::error())),
        None => lines.push(Line::from("")),
    }
    lines
}

fn checkbox_line(input: FormInput, draft: &DomainDraft, focused: bool) -> Line<'static> {
    let checked = match input {
        FormInput::Resignation => draft.resignation,
        _ => draft.archived,
    };
    let mark = if checked { "[x]" } else { "[ ]" };
    let note = match input {
        FormInput::Archived if !draft.archived => "  clears the expiry date",
        _ => "",
    };
    Line::from(vec![
        Span::styled(format!("{mark} {}", input.label()), Styles::input(focused)),
        Span::styled(note, Style::default().fg(Color::DarkGray)),
    ])
}

// ========== Delete confirmation ==========

fn render_confirm_delete(frame: &mut Frame, name: &str, confirm_focused: bool) {
    let c = colors();
    let area = centered_rect(46, 9, frame.area());
    let inner = frame_modal(frame, area, "Confirm deletion", c.error);

    let cancel_style = if confirm_focused {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };
    let delete_style = if confirm_focused {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled("Delete this domain permanently?", Style::default().fg(c.fg)),
        Line::styled(format!("\"{name}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", delete_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

// ========== Extend ==========

fn render_extend(app: &App, frame: &mut Frame, domain_id: &str) {
    let c = colors();
    let dashboard = app.domains.dashboard();
    let years = dashboard.extend_years();
    let area = centered_rect(46, 9, frame.area());
    let inner = frame_modal(frame, area, "Extend expiry", c.border_focused);

    let Some(domain) = dashboard.domain(domain_id) else {
        frame.render_widget(Paragraph::new("Domain no longer exists"), inner);
        return;
    };
    let new_date = domain
        .extend_expiry(years)
        .map(|d| format_renew_date(d.expire_date))
        .unwrap_or_else(|e| e.to_string());

    let lines = vec![
        Line::styled(domain.name.clone(), Styles::title()),
        Line::from(vec![
            Span::styled("Current  ", Styles::label()),
            Span::raw(format_renew_date(domain.expire_date)),
        ]),
        Line::from(vec![
            Span::styled("Extend   ", Styles::label()),
            Span::styled(
                format!("◀ {years} year{} ▶", if years == 1 { "" } else { "s" }),
                Styles::input(true),
            ),
        ]),
        Line::from(vec![
            Span::styled("New      ", Styles::label()),
            Span::styled(new_date, Style::default().fg(c.success)),
        ]),
        Line::from(""),
        Line::from(
            [key_hint("←→", "Years"), key_hint("Enter", "Extend"), key_hint("Esc", "Cancel")].concat(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

// ========== Filters ==========

fn render_filter(app: &App, frame: &mut Frame, focus: FilterField) {
    let filters = app.domains.dashboard().filters();
    let area = centered_rect(50, 10, frame.area());
    let inner = frame_modal(frame, area, "Filters", colors().border_focused);

    let mut lines = vec![Line::from("")];
    for field in FilterField::ALL {
        let value = match field {
            FilterField::Status => match filters.status {
                StatusFilter::All => "All".to_string(),
                StatusFilter::Only(status) => status.label().to_string(),
            },
            FilterField::Company => filter_value(&filters.company.to_string()),
            FilterField::Registrar => filter_value(&filters.registrar.to_string()),
        };
        let focused = field == focus;
        let value = if focused {
            format!("◀ {value} ▶")
        } else {
            format!("  {value}")
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<11}", field.label()), Styles::label()),
            Span::styled(value, Styles::input(focused)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        [key_hint("←→", "Change"), key_hint("r", "Reset"), key_hint("Enter", "Done")].concat(),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// "all" reads as "All"; an empty registrar as "(none)".
fn filter_value(raw: &str) -> String {
    match raw {
        "all" => "All".to_string(),
        "" => "(none)".to_string(),
        other => other.to_string(),
    }
}

// ========== Help ==========

fn render_help(frame: &mut Frame) {
    let area = centered_rect(56, 24, frame.area());
    let inner = frame_modal(frame, area, "Help", colors().border_focused);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section("Table"),
        entry("↑↓ / jk", "Move selection"),
        entry("g / G", "First / last row"),
        entry("/", "Search name, company, registrar"),
        entry("f", "Filter by status, company, registrar"),
        entry("1 - 6", "Sort by column (again to reverse)"),
        Line::from(""),
        section("Changes"),
        entry("a", "Add a registered domain"),
        entry("r", "Request a new domain"),
        entry("e / Enter", "Edit selected"),
        entry("x", "Extend expiry by whole years"),
        entry("A", "Archive / restore"),
        entry("d / Del", "Delete"),
        Line::from(""),
        section("General"),
        entry("Alt+r / F5", "Reload from server"),
        entry("Alt+l", "Sign out"),
        entry("? / Alt+h", "This help"),
        entry("q", "Quit"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
