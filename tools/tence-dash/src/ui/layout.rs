//! Main layout orchestration.
//!
//! Renders the overall dashboard structure:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  TENCE AI DASHBOARD  ● PREMIUM               [Tab]Focus [?]Help  │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  AGENTS                │  KNOWLEDGE GRAPH                       │
//! │  [1] Planner ...       ├────────────────────────────────────────┤
//! │  [2] Worker  ...       │  LOCAL MODEL STATUS                    │
//! │                        ├────────────────────────────────────────┤
//! ├────────────────────────┤  TERMINAL                              │
//! │  SESSION               ├────────────────────────────────────────┤
//! │  ...                   │  LLM SETTINGS                          │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  [↑↓] Navigate   [Enter] Open   [Tab] Focus   [^C] Quit          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`regions`] is the single source of truth for where each pane lives; both
//! rendering and mouse hit-testing go through it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState, FormField, Intent, Pane};

use super::{left_panel, right_panel, widgets};

/// Height of one model entry (name line + log line).
const MODEL_ROWS: u16 = 2;

/// Screen areas of every pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub agents: Rect,
    pub session: Rect,
    pub knowledge_graph: Rect,
    pub models: Rect,
    pub terminal: Rect,
    pub settings: Rect,
    pub footer: Rect,
}

/// Compute pane areas for a screen of `area` size.
pub fn regions(area: Rect, model_count: usize) -> Regions {
    // Main vertical layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(area);

    // Horizontal split: left column (agents + session) + main column
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(7)])
        .split(body_chunks[0]);

    let model_height = model_count as u16 * MODEL_ROWS + 2;
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Knowledge graph placeholder
            Constraint::Length(model_height), // Model status
            Constraint::Min(8),               // Terminal
            Constraint::Length(FormField::ALL.len() as u16 + 2), // Settings form
        ])
        .split(body_chunks[1]);

    Regions {
        header: main_chunks[0],
        agents: left_chunks[0],
        session: left_chunks[1],
        knowledge_graph: right_chunks[0],
        models: right_chunks[1],
        terminal: right_chunks[2],
        settings: right_chunks[3],
        footer: main_chunks[2],
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let models = app.models();
    let regions = regions(frame.area(), models.len());

    render_header(frame, regions.header, app);
    left_panel::render(frame, &regions, app);
    right_panel::render(frame, &regions, app, &models);
    render_footer(frame, regions.footer, app);

    if let Some(agent) = app.selected_agent() {
        widgets::render_agent_modal(frame, agent);
    }

    // Render help overlay if active
    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Map a left click at (`column`, `row`) to an intent.
pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<Intent> {
    let position = Position::new(column, row);

    if app.state == AppState::Help {
        return Some(Intent::ToggleHelp);
    }

    if app.modal_open() {
        // The close button and the backdrop both close the modal.
        return if widgets::close_button_area(area).contains(position)
            || !widgets::agent_modal_area(area).contains(position)
        {
            Some(Intent::ClearSelection)
        } else {
            None
        };
    }

    let regions = regions(area, app.models().len());

    if regions.agents.contains(position) {
        let inner = regions.agents.inner(Margin::new(1, 1));
        if inner.contains(position) {
            let index = (row - inner.y) as usize;
            if let Some(agent) = app.agents().get(index) {
                return Some(Intent::SelectAgent(agent.id));
            }
        }
        return Some(Intent::FocusPane(Pane::Agents));
    }

    if regions.terminal.contains(position) {
        return Some(Intent::FocusPane(Pane::Terminal));
    }

    if regions.settings.contains(position) {
        let inner = regions.settings.inner(Margin::new(1, 1));
        if inner.contains(position) {
            if let Some(field) = FormField::ALL.get((row - inner.y) as usize) {
                return Some(Intent::FocusField(*field));
            }
        }
        return Some(Intent::FocusPane(Pane::Settings));
    }

    None
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " TENCE AI DASHBOARD ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(concat!("v", env!("CARGO_PKG_VERSION")), Style::default().fg(Color::DarkGray)),
    ];

    let premium = if app.premium_unlocked() {
        Span::styled(" ● PREMIUM ", Style::default().fg(Color::Magenta))
    } else {
        Span::styled(" ○ LOCKED ", Style::default().fg(Color::DarkGray))
    };

    let started = Span::styled(
        format!(" Session started {} ", app.started_at().format("%H:%M:%S")),
        Style::default().fg(Color::DarkGray),
    );

    let hints = vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw("Focus "),
        Span::styled("[F1]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
        Span::styled("[^C]", Style::default().fg(Color::Yellow)),
        Span::raw("Quit "),
    ];

    // Calculate spacing
    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let status_len = premium.content.chars().count() + started.content.chars().count();
    let hints_len: usize = hints.iter().map(|s| s.content.chars().count()).sum();
    let padding = area
        .width
        .saturating_sub((title_len + status_len + hints_len) as u16 + 2);

    let mut spans = title;
    spans.push(premium);
    spans.push(started);
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the footer with keyboard shortcuts for the focused pane.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let bindings: &[(&str, &str)] = if app.modal_open() {
        &[("[Esc/Enter/C]", " Close  ")]
    } else {
        match app.focus() {
            Pane::Agents => &[
                ("[↑↓]", " Navigate  "),
                ("[Enter]", " Open  "),
                ("[1-9]", " Jump  "),
                ("[Tab]", " Focus  "),
                ("[?]", " Help  "),
                ("[Q]", " Quit  "),
            ],
            Pane::Terminal => &[
                ("[Enter]", " Submit  "),
                ("[Shift+Enter]", " Newline  "),
                ("[Tab]", " Focus  "),
                ("[Esc]", " Back  "),
            ],
            Pane::Settings => &[
                ("[↑↓]", " Field  "),
                ("[←→]", " Step  "),
                ("[0-9.]", " Edit  "),
                ("[Tab]", " Focus  "),
                ("[Esc]", " Back  "),
            ],
        }
    };

    let keybinds: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*label),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}

/// Border style for a pane, highlighted when focused.
pub(super) fn pane_border(app: &App, pane: Pane) -> Style {
    if app.focus() == pane && !app.modal_open() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
