//! Help overlay widget.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

fn section(title: &'static str) -> [Line<'static>; 2] {
    [
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
        Line::raw(""),
    ]
}

fn binding(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "TENCE AI DASHBOARD HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    help_text.extend(section("Global"));
    help_text.extend([
        binding("Tab", "Focus next pane"),
        binding("Shift+Tab", "Focus previous pane"),
        binding("F1 / ?", "Toggle this help (? only outside text fields)"),
        binding("Ctrl+C", "Quit"),
        Line::raw(""),
    ]);

    help_text.extend(section("Agents"));
    help_text.extend([
        binding("↑/↓", "Move cursor"),
        binding("Enter", "Open agent details"),
        binding("1-9", "Open agent by position"),
        binding("Esc / C", "Close agent details (or click [ Close ])"),
        binding("q", "Quit"),
        Line::raw(""),
    ]);

    help_text.extend(section("Terminal"));
    help_text.extend([
        binding("Enter", "Submit command"),
        binding("Shift+Enter", "Insert newline"),
        binding("Esc", "Back to agents"),
        Line::raw(""),
    ]);

    help_text.extend(section("Settings"));
    help_text.extend([
        binding("↑/↓", "Select field"),
        binding("←/→", "Step value down / up"),
        binding("Backspace", "Delete last character"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}
