//! End-to-end dashboard flows: intents in, rendered screen out.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use tence_dash::domain::{FormField, Step, PREMIUM_KEY};
use tence_dash::{input, ui, App, Intent, Pane, Settings, SettingsField, TerminalSession};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn screen_area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

/// Render one frame and return it as text, one line per row.
fn draw(app: &App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if let Some(intent) = input::map_key(app, KeyEvent::new(code, modifiers)) {
        app.dispatch(intent);
    }
}

/// Screen position of the first occurrence of `needle`.
fn find(screen: &str, needle: &str) -> Option<(u16, u16)> {
    screen.lines().enumerate().find_map(|(y, row)| {
        let byte = row.find(needle)?;
        let x = row[..byte].chars().count();
        Some((x as u16, y as u16))
    })
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
    if let Some(intent) = input::map_event(app, &event, screen_area()) {
        app.dispatch(intent);
    }
}

#[test]
fn test_initial_screen_shows_every_panel() {
    let app = App::default();
    let screen = draw(&app);

    assert!(screen.contains("TENCE AI DASHBOARD"));
    assert!(screen.contains("Planner"));
    assert!(screen.contains("Worker"));
    assert!(screen.contains("Knowledge Graph Visualization"));
    assert!(screen.contains("llama.cpp"));
    assert!(screen.contains("ghost-core (phi-2)"));
    assert!(screen.contains("ghost-pro"));
    assert!(screen.contains("locked"));
    assert!(screen.contains("Enter command and press Enter"));
    assert!(screen.contains("Temperature"));
    assert!(screen.contains("Max Tokens"));
    assert!(!screen.contains("Role:"));
}

#[test]
fn test_selecting_agent_opens_and_closes_modal() {
    let mut app = App::default();

    app.dispatch(Intent::SelectAgent(1));
    let screen = draw(&app);
    assert!(screen.contains("Agent #1"));
    assert!(screen.contains("Role: Planning"));
    assert!(screen.contains("Plans tasks"));

    // Selecting another agent replaces the modal contents.
    app.dispatch(Intent::SelectAgent(2));
    let screen = draw(&app);
    assert!(screen.contains("Role: Execution"));
    assert!(!screen.contains("Role: Planning"));

    app.dispatch(Intent::ClearSelection);
    assert!(!draw(&app).contains("Role:"));
    // Clearing twice is harmless.
    app.dispatch(Intent::ClearSelection);
    assert!(app.selected_agent().is_none());
}

#[test]
fn test_premium_key_unlocks_model_on_next_frame() {
    let mut app = App::default();
    let locked = app.models();
    assert_eq!(locked.len(), 4);
    assert!(!locked[3].running);
    assert_eq!(locked[3].tokens_per_second, 0.0);
    assert_eq!(locked[3].log, "locked");

    app.dispatch(Intent::SetPremiumKey(PREMIUM_KEY.to_string()));
    let unlocked = app.models();
    assert!(unlocked[3].running);
    assert_eq!(unlocked[3].tokens_per_second, 30.0);
    assert_eq!(unlocked[3].log, "ready");
    assert_eq!(&unlocked[..3], &locked[..3]);
    assert!(draw(&app).contains("PREMIUM"));

    app.dispatch(Intent::SetPremiumKey("12345".to_string()));
    assert!(!app.premium_unlocked());
    assert_eq!(app.models()[3].log, "locked");
}

#[test]
fn test_typed_command_is_echoed_with_response() {
    let mut app = App::default();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Pane::Terminal);

    type_text(&mut app, "status");
    assert_eq!(app.terminal().pending_input(), "status");
    press(&mut app, KeyCode::Enter);

    let log: Vec<&str> = app.terminal().log().collect();
    assert_eq!(log, vec!["> status", "Response: ..."]);
    assert_eq!(app.terminal().pending_input(), "");

    let screen = draw(&app);
    assert!(screen.contains("> status"));
    assert!(screen.contains("Response: ..."));
}

#[test]
fn test_multiline_command_renders_on_separate_rows() {
    let mut app = App::default();
    app.dispatch(Intent::FocusPane(Pane::Terminal));

    type_text(&mut app, "ab");
    press_with(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
    type_text(&mut app, "cd");
    press(&mut app, KeyCode::Enter);

    let log: Vec<&str> = app.terminal().log().collect();
    assert_eq!(log, vec!["> ab\ncd", "Response: ..."]);

    let screen = draw(&app);
    let (echo_x, echo_y) = find(&screen, "> ab").unwrap();
    let row_below = screen.lines().nth(echo_y as usize + 1).unwrap();
    let below: String = row_below.chars().skip(echo_x as usize).take(2).collect();
    assert_eq!(below, "cd");
    assert!(!screen.contains("> abcd"));
}

#[test]
fn test_empty_command_is_still_logged() {
    let mut app = App::default();
    app.dispatch(Intent::SubmitCommand);
    let log: Vec<&str> = app.terminal().log().collect();
    assert_eq!(log, vec!["> ", "Response: ..."]);
}

#[test]
fn test_log_cap_keeps_newest_pairs() {
    let mut app = App::new(Settings::default(), TerminalSession::with_max_entries(4));
    for command in ["one", "two", "three"] {
        app.dispatch(Intent::SetPendingInput(command.to_string()));
        app.dispatch(Intent::SubmitCommand);
    }
    let log: Vec<&str> = app.terminal().log().collect();
    assert_eq!(log, vec!["> two", "Response: ...", "> three", "Response: ..."]);
    assert_eq!(app.terminal().submitted(), 3);
    assert!(draw(&app).contains("Log:      4 / 4"));
}

#[test]
fn test_settings_editing_through_keys() {
    let mut app = App::default();
    app.dispatch(Intent::FocusPane(Pane::Settings));

    // Temperature: clear then type a new value.
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "1.2");
    assert_eq!(app.settings().temperature, 1.2);

    // Max tokens: garbage is rejected and the old value retained.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.form_cursor(), FormField::Setting(SettingsField::MaxTokens));
    type_text(&mut app, "x");
    assert_eq!(app.settings().max_tokens, 512);
    assert!(app.form().error(SettingsField::MaxTokens).is_some());
    assert!(draw(&app).contains("is not a number"));

    press(&mut app, KeyCode::Backspace);
    assert!(app.form().error(SettingsField::MaxTokens).is_none());
    press(&mut app, KeyCode::Right);
    assert_eq!(app.settings().max_tokens, 513);
}

#[test]
fn test_settings_reject_out_of_range() {
    let mut app = App::default();
    app.dispatch(Intent::EditSetting {
        field: SettingsField::TopP,
        input: "1.5".to_string(),
    });
    assert_eq!(app.settings().top_p, 0.9);
    app.dispatch(Intent::EditSetting {
        field: SettingsField::Temperature,
        input: "-1".to_string(),
    });
    assert_eq!(app.settings().temperature, 0.7);

    // Independent fields are untouched by rejections elsewhere.
    app.dispatch(Intent::NudgeSetting {
        field: SettingsField::TopP,
        step: Step::Up,
    });
    assert_eq!(app.settings().top_p, 1.0);
}

#[test]
fn test_premium_field_typed_character_by_character() {
    let mut app = App::default();
    app.dispatch(Intent::FocusField(FormField::PremiumKey));
    type_text(&mut app, "123");
    assert!(!app.premium_unlocked());
    type_text(&mut app, "4");
    assert!(app.premium_unlocked());
    press(&mut app, KeyCode::Backspace);
    assert!(!app.premium_unlocked());
}

#[test]
fn test_mouse_opens_and_dismisses_modal() {
    let mut app = App::default();
    let regions = ui::regions(screen_area(), app.models().len());

    // First row inside the agents border is agent #1.
    click(&mut app, regions.agents.x + 2, regions.agents.y + 1);
    assert_eq!(app.selected_agent().map(|a| a.id), Some(1));

    // Clicking inside the modal keeps it open.
    click(&mut app, WIDTH / 2, HEIGHT / 2);
    assert!(app.modal_open());

    click(&mut app, 0, 0);
    assert!(!app.modal_open());
}

#[test]
fn test_clicking_close_button_dismisses_modal() {
    let mut app = App::default();
    app.dispatch(Intent::SelectAgent(1));

    let screen = draw(&app);
    let (x, y) = find(&screen, "[ Close ]").unwrap();

    // Every cell of the button closes the modal.
    click(&mut app, x + 4, y);
    assert!(!app.modal_open());

    app.dispatch(Intent::SelectAgent(1));
    click(&mut app, x, y);
    assert!(!app.modal_open());
    assert!(!draw(&app).contains("[ Close ]"));
}

#[test]
fn test_esc_from_terminal_returns_to_agents_without_quitting() {
    let mut app = App::default();
    app.dispatch(Intent::FocusPane(Pane::Terminal));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Pane::Agents);
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_mouse_focuses_settings_field() {
    let mut app = App::default();
    let regions = ui::regions(screen_area(), app.models().len());

    click(&mut app, regions.settings.x + 2, regions.settings.y + 1 + 3);
    assert_eq!(app.focus(), Pane::Settings);
    assert_eq!(app.form_cursor(), FormField::PremiumKey);

    click(&mut app, regions.terminal.x + 2, regions.terminal.y + 1);
    assert_eq!(app.focus(), Pane::Terminal);
}

#[test]
fn test_help_overlay_and_quit() {
    let mut app = App::default();
    press(&mut app, KeyCode::F(1));
    assert!(draw(&app).contains("TENCE AI DASHBOARD HELP"));

    press(&mut app, KeyCode::Char('x'));
    assert!(!draw(&app).contains("TENCE AI DASHBOARD HELP"));

    let quit = input::map_key(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    app.dispatch(quit.unwrap());
    assert!(app.should_quit());
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut app = App::default();
    app.dispatch(Intent::SelectAgent(2));
    let json = serde_json::to_value(app.snapshot()).unwrap();

    assert_eq!(json["selected"]["name"], "Worker");
    assert_eq!(json["models"][3]["name"], "ghost-pro");
    assert_eq!(json["settings"]["max_tokens"], 512);
    assert_eq!(json["premium_unlocked"], false);
}
