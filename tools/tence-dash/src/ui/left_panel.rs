//! Left panel: Agent list + Session summary.
//!
//! ```text
//! ┌────────────────────────────────┐
//! │   AGENTS                       │
//! │  [1] ○ Planner - Planning (Idle)│
//! │  [2] ● Worker - Execution (...) │
//! ├────────────────────────────────┤
//! │  SESSION                       │
//! │  Focus:    Agents              │
//! │  Commands: 0                   │
//! │  Log:      0 / 200             │
//! │  Premium:  LOCKED              │
//! └────────────────────────────────┘
//! ```

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{AgentStatus, App, Pane};

use super::layout::{pane_border, Regions};

/// Render the left panel.
pub fn render(frame: &mut Frame, regions: &Regions, app: &App) {
    render_agent_list(frame, regions.agents, app);
    render_session(frame, regions.session, app);
}

/// Render the agent list.
fn render_agent_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Pane::Agents;
    let selected_id = app.selected_agent().map(|a| a.id);

    let items: Vec<ListItem> = app
        .agents()
        .iter()
        .enumerate()
        .map(|(idx, agent)| {
            let status_color = match agent.status {
                AgentStatus::Running => Color::Green,
                AgentStatus::Idle => Color::Yellow,
                AgentStatus::Other(_) => Color::DarkGray,
            };

            let hotkey = if idx < 9 {
                format!("[{}] ", idx + 1)
            } else {
                "    ".to_string()
            };

            // Highlight cursor row while the list has focus
            let line_style = if focused && idx == app.agent_cursor() {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else if Some(agent.id) == selected_id {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::styled(hotkey, Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{} ", agent.status.indicator()),
                    Style::default().fg(status_color),
                ),
                Span::styled(
                    agent.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {} ", agent.role)),
                Span::styled(
                    format!("({})", agent.status),
                    Style::default().fg(status_color),
                ),
            ];

            ListItem::new(Line::from(spans)).style(line_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" AGENTS ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(pane_border(app, Pane::Agents)),
    );

    frame.render_widget(list, area);
}

/// Render session summary panel.
fn render_session(frame: &mut Frame, area: Rect, app: &App) {
    let focus_label = match app.focus() {
        Pane::Agents => "Agents",
        Pane::Terminal => "Terminal",
        Pane::Settings => "Settings",
    };

    let (premium_label, premium_color) = if app.premium_unlocked() {
        ("UNLOCKED", Color::Magenta)
    } else {
        ("LOCKED", Color::DarkGray)
    };

    let selected = app
        .selected_agent()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "-".to_string());

    let terminal = app.terminal();
    let log_size = match terminal.max_entries() {
        Some(max) => format!("{} / {}", terminal.log_len(), max),
        None => terminal.log_len().to_string(),
    };

    let text = vec![
        Line::from(vec![
            Span::raw("Focus:    "),
            Span::styled(focus_label, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(selected, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Commands: "),
            Span::styled(
                terminal.submitted().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::raw("Log:      "),
            Span::styled(log_size, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Premium:  "),
            Span::styled(premium_label, Style::default().fg(premium_color)),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" SESSION ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
