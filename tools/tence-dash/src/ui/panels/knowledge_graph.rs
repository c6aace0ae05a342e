//! Knowledge graph placeholder.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Static label; the graph itself has no data model yet.
pub const PLACEHOLDER: &str = "Knowledge Graph Visualization";

pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(PLACEHOLDER)
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(
            Block::default()
                .title(" KNOWLEDGE GRAPH ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
