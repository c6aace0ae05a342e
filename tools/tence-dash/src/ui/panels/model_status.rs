//! Local model status panel.
//!
//! ```text
//! ● llama.cpp - Running - 15 tokens/s
//!     ready
//! ○ ghost-pro - Stopped - 0 tokens/s
//!     locked
//! ```

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::ModelDescriptor;

/// Render the model status panel.
pub fn render(frame: &mut Frame, area: Rect, models: &[ModelDescriptor]) {
    let text: Vec<Line> = models.iter().flat_map(model_lines).collect();

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" LOCAL MODEL STATUS ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

fn model_lines(model: &ModelDescriptor) -> [Line<'static>; 2] {
    let state_color = if model.running {
        Color::Green
    } else {
        Color::Red
    };

    let headline = Line::from(vec![
        Span::styled(
            format!("{} ", model.indicator()),
            Style::default().fg(state_color),
        ),
        Span::styled(
            model.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(model.state_label(), Style::default().fg(state_color)),
        Span::raw(" - "),
        Span::styled(
            format_throughput(model.tokens_per_second),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let log = Line::from(Span::styled(
        format!("    {}", model.log),
        Style::default().fg(Color::DarkGray),
    ));

    [headline, log]
}

/// Format tokens/s without a trailing ".0" for whole numbers.
fn format_throughput(tps: f32) -> String {
    if tps.fract() == 0.0 {
        format!("{} tokens/s", tps as u32)
    } else {
        format!("{:.1} tokens/s", tps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_throughput() {
        assert_eq!(format_throughput(0.0), "0 tokens/s");
        assert_eq!(format_throughput(30.0), "30 tokens/s");
        assert_eq!(format_throughput(12.4), "12.4 tokens/s");
    }
}
