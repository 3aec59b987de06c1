//! Main layout

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// Draw the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // page
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);
    render_page(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal goes on top
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let left = format!(" Domain Tracker v{}", env!("CARGO_PKG_VERSION"));
    let right = app
        .user_name()
        .map(|name| {
            let role = if app.can_edit() { "" } else { " (read-only)" };
            format!("{name}{role} ")
        })
        .unwrap_or_default();

    let padding = usize::from(area.width).saturating_sub(left.chars().count() + right.chars().count());
    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}

fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(!app.modal.is_open()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.page {
        Page::Login => pages::login::render(app, frame, inner),
        Page::Domains => pages::domains::render(app, frame, inner),
    }
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 40, 10));
    }
}
