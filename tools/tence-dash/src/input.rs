//! Keyboard and mouse mapping.
//!
//! Turns crossterm events into [`Intent`]s by looking at a read-only view of
//! the [`App`]. Nothing here mutates state; the event loop hands the result
//! to [`App::dispatch`].

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, MouseButton,
    MouseEventKind,
};
use ratatui::layout::Rect;

use crate::domain::{App, AppState, FormField, Intent, Pane, Step};
use crate::ui;

/// Keyboard protocol flags pushed at start-up when the terminal supports them.
///
/// Under the legacy encoding Shift+Enter arrives as a bare `\r`; with
/// escape codes disambiguated it carries `KeyModifiers::SHIFT`.
pub fn keyboard_enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
}

/// Map any terminal event. `area` is the current screen size.
pub fn map_event(app: &App, event: &Event, area: Rect) -> Option<Intent> {
    match event {
        Event::Key(key) => map_key(app, *key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                ui::hit_test(app, area, mouse.column, mouse.row)
            }
            _ => None,
        },
        _ => None,
    }
}

/// Map a key event.
pub fn map_key(app: &App, key: KeyEvent) -> Option<Intent> {
    // Press and auto-repeat; releases are reported once event types are on.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Some(Intent::Quit);
    }

    if app.state == AppState::Help {
        // Any key closes help
        return Some(Intent::ToggleHelp);
    }

    if app.modal_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => {
                Some(Intent::ClearSelection)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(1) => return Some(Intent::ToggleHelp),
        KeyCode::Tab => return Some(Intent::FocusNext),
        KeyCode::BackTab => return Some(Intent::FocusPrev),
        _ => {}
    }

    match app.focus() {
        Pane::Agents => map_agents_key(app, key),
        Pane::Terminal => map_terminal_key(app, key),
        Pane::Settings => map_settings_key(app, key),
    }
}

fn map_agents_key(app: &App, key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveCursor(Step::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveCursor(Step::Down)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::ActivateCursor),
        KeyCode::Char('?') => Some(Intent::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.agents().get(index).map(|agent| Intent::SelectAgent(agent.id))
        }
        _ => None,
    }
}

/// True for plain typing: no modifiers other than Shift.
fn is_text_input(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn map_terminal_key(app: &App, key: KeyEvent) -> Option<Intent> {
    let pending = app.terminal().pending_input();
    match key.code {
        // Bare Enter commits; the keystroke never reaches the buffer.
        KeyCode::Enter if key.modifiers.is_empty() => Some(Intent::SubmitCommand),
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            Some(Intent::SetPendingInput(format!("{}\n", pending)))
        }
        KeyCode::Char(c) if is_text_input(&key) => {
            Some(Intent::SetPendingInput(format!("{}{}", pending, c)))
        }
        KeyCode::Backspace => {
            let mut value = pending.to_string();
            value.pop()?;
            Some(Intent::SetPendingInput(value))
        }
        KeyCode::Esc => Some(Intent::FocusPane(Pane::Agents)),
        _ => None,
    }
}

fn map_settings_key(app: &App, key: KeyEvent) -> Option<Intent> {
    let field = app.form_cursor();
    match key.code {
        KeyCode::Up => return Some(Intent::MoveCursor(Step::Up)),
        KeyCode::Down | KeyCode::Enter => return Some(Intent::MoveCursor(Step::Down)),
        KeyCode::Esc => return Some(Intent::FocusPane(Pane::Agents)),
        _ => {}
    }

    match field {
        FormField::Setting(setting) => {
            let buffer = app.form().buffer(setting);
            match key.code {
                KeyCode::Left => Some(Intent::NudgeSetting {
                    field: setting,
                    step: Step::Down,
                }),
                KeyCode::Right => Some(Intent::NudgeSetting {
                    field: setting,
                    step: Step::Up,
                }),
                KeyCode::Char(c) if is_text_input(&key) => Some(Intent::EditSetting {
                    field: setting,
                    input: format!("{}{}", buffer, c),
                }),
                KeyCode::Backspace => {
                    let mut input = buffer.to_string();
                    input.pop()?;
                    Some(Intent::EditSetting {
                        field: setting,
                        input,
                    })
                }
                _ => None,
            }
        }
        FormField::PremiumKey => {
            let entered = app.premium_key();
            match key.code {
                KeyCode::Char(c) if is_text_input(&key) => {
                    Some(Intent::SetPremiumKey(format!("{}{}", entered, c)))
                }
                KeyCode::Backspace => {
                    let mut value = entered.to_string();
                    value.pop()?;
                    Some(Intent::SetPremiumKey(value))
                }
                _ => None,
            }
        }
    }
}
