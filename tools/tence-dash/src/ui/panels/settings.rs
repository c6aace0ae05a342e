//! LLM settings form.
//!
//! ```text
//! ▶ Temperature  [0.7         ]
//!   Top P        [0.9         ]
//!   Max Tokens   [abc         ]  ⚠ Max Tokens: 'abc' is not a number
//!   Premium Key  [            ]  locked
//! ```

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, FormField, Pane};

use super::super::layout::pane_border;

/// Width of the value box, excluding brackets.
const VALUE_WIDTH: usize = 12;

/// Label column width.
const LABEL_WIDTH: usize = 13;

/// Render the settings form.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Pane::Settings && !app.modal_open();

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| field_line(app, field, focused && field == app.form_cursor()))
        .collect();

    let block = Block::default()
        .title(" LLM SETTINGS ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(pane_border(app, Pane::Settings));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if focused {
        let text_len = field_text(app, app.form_cursor()).chars().count();
        let col = 2 + LABEL_WIDTH + 1 + text_len.min(VALUE_WIDTH);
        let row = app.form_cursor().index();
        if (col as u16) < inner.width && (row as u16) < inner.height {
            frame.set_cursor_position(Position::new(inner.x + col as u16, inner.y + row as u16));
        }
    }
}

/// Raw text shown in a field's box.
fn field_text(app: &App, field: FormField) -> &str {
    match field {
        FormField::Setting(setting) => app.form().buffer(setting),
        FormField::PremiumKey => app.premium_key(),
    }
}

fn field_line(app: &App, field: FormField, active: bool) -> Line<'static> {
    let marker = if active { "▶ " } else { "  " };
    let label_style = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    // Show the tail of long input so the cursor end stays visible.
    let text = field_text(app, field);
    let chars: Vec<char> = text.chars().collect();
    let shown: String = chars[chars.len().saturating_sub(VALUE_WIDTH)..].iter().collect();

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<width$}", shown, width = VALUE_WIDTH),
            Style::default().fg(Color::White),
        ),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
    ];

    match field {
        FormField::Setting(setting) => {
            if let Some(err) = app.form().error(setting) {
                spans.push(Span::styled(
                    format!("  ⚠ {}", err),
                    Style::default().fg(Color::Red),
                ));
            }
        }
        FormField::PremiumKey => {
            let (label, color) = if app.premium_unlocked() {
                ("unlocked", Color::Magenta)
            } else {
                ("locked", Color::DarkGray)
            };
            spans.push(Span::styled(format!("  {}", label), Style::default().fg(color)));
        }
    }

    Line::from(spans)
}
