//! Domains page
//!
//! Search box and filter summary on top, the domain table below. Row colors
//! follow the lifecycle status.

use domain_tracker_core::{DomainRow, SortDirection, SortField, StatusFilter, format_renew_date};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// Columns in display order, with the sort key each one maps to.
const COLUMNS: [(&str, Option<SortField>, Constraint); 7] = [
    ("#", Some(SortField::Id), Constraint::Length(5)),
    ("Domain", Some(SortField::Name), Constraint::Min(20)),
    ("Expires", Some(SortField::ExpireDate), Constraint::Length(12)),
    ("Days", None, Constraint::Length(7)),
    ("Company", Some(SortField::Company), Constraint::Length(20)),
    ("Registrar", Some(SortField::Registrar), Constraint::Length(14)),
    ("Status", Some(SortField::Status), Constraint::Length(15)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let rows = app.domains.rows(app.today);
    render_toolbar(app, rows.len(), frame, chunks[0]);

    if rows.is_empty() {
        render_empty(app, frame, chunks[1]);
    } else {
        render_table(app, &rows, frame, chunks[1]);
    }
}

// ========== Toolbar ==========

fn render_toolbar(app: &App, shown: usize, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let search_focused = app.focus.is_search();
    let search = app.domains.dashboard().search();
    let search_text = if search.is_empty() && !search_focused {
        Span::styled("press / to search", Styles::label())
    } else if search_focused {
        Span::styled(format!("{search}▎"), Styles::input(true))
    } else {
        Span::styled(search.to_string(), Styles::input(false))
    };
    let search_box = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Styles::border(search_focused)),
    );
    frame.render_widget(search_box, columns[0]);

    frame.render_widget(
        Paragraph::new(summary(app, shown)),
        columns[1].inner(Margin::new(1, 1)),
    );
}

/// "Showing 3 of 10 · 2 filters (status: expired) · sorted by Expires ▲"
fn summary(app: &App, shown: usize) -> Line<'static> {
    let dashboard = app.domains.dashboard();
    let c = colors();
    let total = dashboard.domains().len();
    let separator = || Span::styled(" · ", Styles::label());

    let mut spans = vec![Span::raw(format!("Showing {shown} of {total}"))];

    let filters = dashboard.filters();
    let active = filters.active_count();
    if active > 0 {
        let mut parts = Vec::new();
        if let StatusFilter::Only(status) = filters.status {
            parts.push(format!("status: {}", status.label()));
        }
        if !filters.company.is_all() {
            parts.push(format!("company: {}", filters.company));
        }
        if !filters.registrar.is_all() {
            parts.push(format!("registrar: {}", filters.registrar));
        }
        spans.push(separator());
        spans.push(Span::styled(
            format!("{active} filter{} ({})", if active == 1 { "" } else { "s" }, parts.join(", ")),
            Style::default().fg(c.warning),
        ));
    }

    let sort = dashboard.sort();
    spans.push(separator());
    spans.push(Span::styled(
        format!("sorted by {} {}", sort.field.label(), arrow(sort.direction)),
        Styles::label(),
    ));

    if dashboard.is_loading() {
        spans.push(separator());
        spans.push(Span::styled("loading...", Style::default().fg(c.highlight)));
    }

    Line::from(spans)
}

fn arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

// ========== Table ==========

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let dashboard = app.domains.dashboard();
    let message = if dashboard.is_loading() {
        "Loading domains..."
    } else if let Some(err) = dashboard.last_error().filter(|_| dashboard.domains().is_empty()) {
        err
    } else if dashboard.domains().is_empty() {
        "No domains yet"
    } else {
        "No domains match the current search and filters"
    };

    let mut lines = vec![Line::from(""), Line::styled(format!("  {message}"), Styles::label())];
    if !dashboard.is_loading() && dashboard.domains().is_empty() && app.can_edit() {
        lines.push(Line::from(""));
        lines.push(Line::styled("  Press a to add a domain, r to request one", Styles::label()));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_table(app: &App, rows: &[DomainRow], frame: &mut Frame, area: Rect) {
    let c = colors();
    let sort = app.domains.dashboard().sort();

    let header = Row::new(COLUMNS.iter().map(|(title, field, _)| {
        if *field == Some(sort.field) {
            Cell::from(format!("{title} {}", arrow(sort.direction)))
                .style(Style::default().fg(c.highlight))
        } else {
            Cell::from(*title)
        }
    }))
    .style(Styles::title().add_modifier(Modifier::UNDERLINED));

    let body = rows.iter().map(|row| {
        let d = &row.domain;
        let status_style = Style::default().fg(c.status(row.status));
        let days = row
            .days_until_expiry
            .map_or_else(|| "-".to_string(), |days| days.to_string());
        let expires = if d.expire_date.is_some() {
            format_renew_date(d.expire_date)
        } else {
            "-".to_string()
        };

        Row::new(vec![
            Cell::from(row.display_index.to_string()).style(Styles::label()),
            Cell::from(d.name.clone()),
            Cell::from(expires),
            Cell::from(days).style(status_style),
            Cell::from(d.company.clone()),
            Cell::from(d.registrar.clone()),
            Cell::from(row.status.label()).style(status_style),
        ])
    });

    let widths = COLUMNS.iter().map(|(_, _, width)| *width);
    let table = Table::new(body, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.domains.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
