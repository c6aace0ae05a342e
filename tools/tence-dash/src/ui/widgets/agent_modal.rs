//! Agent detail modal.

use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::Agent;

use super::centered_rect;

const CLOSE_LABEL: &str = "[ Close ]";

/// Screen area the modal occupies inside `area`.
pub fn agent_modal_area(area: Rect) -> Rect {
    centered_rect(50, 40, area)
}

/// Clickable `[ Close ]` button, pinned to the last row inside the border.
pub fn close_button_area(area: Rect) -> Rect {
    let inner = agent_modal_area(area).inner(Margin::new(1, 1));
    if inner.is_empty() {
        return Rect::default();
    }
    let width = (CLOSE_LABEL.chars().count() as u16).min(inner.width);
    Rect::new(inner.x, inner.bottom() - 1, width, 1)
}

/// Render the modal for the selected agent.
pub fn render_agent_modal(frame: &mut Frame, agent: &Agent) {
    let popup_area = agent_modal_area(frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Agent #{} ", agent.id))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::from(Span::styled(
            agent.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Role: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(agent.role.clone()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(agent.status.to_string()),
        ]),
        Line::raw(""),
        Line::raw(agent.description.clone()),
    ];

    let body = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), body);

    let button = close_button_area(frame.area());
    if button.is_empty() {
        return;
    }
    let close_row = Rect {
        width: inner.width,
        ..button
    };
    let close = Line::from(vec![
        Span::styled(CLOSE_LABEL, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled("  Esc / Enter / C", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(close), close_row);
}
