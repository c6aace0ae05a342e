//! Command terminal panel: log tail plus the pending input box.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, Pane, ECHO_PREFIX};

use super::super::layout::pane_border;

/// Shown in the empty input box.
pub const INPUT_PLACEHOLDER: &str = "Enter command and press Enter";

/// Visible rows of the input box.
const INPUT_ROWS: u16 = 2;

/// Render the terminal panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" TERMINAL ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(pane_border(app, Pane::Terminal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(INPUT_ROWS + 2)])
        .split(inner);

    render_log(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
}

/// Render the newest log rows that fit.
///
/// Multi-line commands take one row per line, so the tail is counted in
/// rows rather than entries.
fn render_log(frame: &mut Frame, area: Rect, app: &App) {
    let lines = log_lines(app);
    let skip = lines.len().saturating_sub(area.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    frame.render_widget(Paragraph::new(visible), area);
}

/// Every log entry split into screen rows, oldest first.
fn log_lines(app: &App) -> Vec<Line<'static>> {
    app.terminal()
        .log()
        .flat_map(|entry| {
            let style = if entry.starts_with(ECHO_PREFIX) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            entry
                .split('\n')
                .map(move |row| Line::from(Span::styled(row.to_string(), style)))
        })
        .collect()
}

/// Render the pending input box.
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Pane::Terminal && !app.modal_open();
    let pending = app.terminal().pending_input();

    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);

    // Keep the last rows of a multi-line command in view.
    let rows: Vec<&str> = pending.split('\n').collect();
    let first = rows.len().saturating_sub(INPUT_ROWS as usize);
    let visible = &rows[first..];

    let paragraph = if pending.is_empty() {
        Paragraph::new(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(
            visible
                .iter()
                .map(|row| Line::raw(row.to_string()))
                .collect::<Vec<_>>(),
        )
    };

    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let last = visible.last().copied().unwrap_or_default();
        let col = (last.chars().count() as u16).min(inner.width - 1);
        let row = (visible.len().saturating_sub(1) as u16).min(inner.height - 1);
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }
}
