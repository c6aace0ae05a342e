//! Tence Dash: Tence AI Dashboard in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Start with default settings
//! tence-dash
//!
//! # Start with custom generation settings and a capped terminal log
//! tence-dash --temperature 1.0 --max-tokens 1024 --max-log-entries 500
//!
//! # Print the initial dashboard state as JSON and exit
//! tence-dash --snapshot
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{layout::Rect, prelude::*};
use tracing::{error, info};

use tence_dash::domain::{App, SettingsField};
use tence_dash::{input, telemetry, ui, DashConfig, DashError};

/// Tence AI Dashboard
#[derive(Parser, Debug)]
#[command(name = "tence-dash")]
#[command(author, version, about = "Terminal dashboard for local agents, models and LLM settings", long_about = None)]
struct Args {
    /// Redraw / input poll interval in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Initial sampling temperature
    #[arg(long)]
    temperature: Option<f64>,

    /// Initial nucleus sampling threshold
    #[arg(long)]
    top_p: Option<f64>,

    /// Initial maximum tokens per response
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Keep at most this many terminal log entries (default: keep all)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_log_entries: Option<u64>,

    /// Write logs to this file (default: discard)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level filter, e.g. "debug" or "tence_dash=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Print the initial dashboard state as JSON and exit
    #[arg(long)]
    snapshot: bool,
}

/// Environment configuration with command-line overrides applied.
fn build_config(args: &Args) -> Result<DashConfig, DashError> {
    let mut config = DashConfig::from_env()?;

    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }
    if let Some(value) = args.temperature {
        config.set_setting(SettingsField::Temperature, value)?;
    }
    if let Some(value) = args.top_p {
        config.set_setting(SettingsField::TopP, value)?;
    }
    if let Some(value) = args.max_tokens {
        config.set_setting(SettingsField::MaxTokens, value as f64)?;
    }
    if let Some(max) = args.max_log_entries {
        config.max_log_entries = Some(max as usize);
    }
    if let Some(path) = &args.log_file {
        config.log_file = Some(path.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args).context("invalid start-up configuration")?;
    telemetry::init_logging(&config)?;

    let mut app = App::new(config.settings, config.terminal_session());

    if args.snapshot {
        let json = serde_json::to_string_pretty(&app.snapshot()).map_err(DashError::Snapshot)?;
        println!("{}", json);
        return Ok(());
    }

    info!(
        tick_ms = config.tick_ms,
        max_log_entries = ?config.max_log_entries,
        "Starting Tence dashboard"
    );

    // Shift+Enter is only distinguishable from Enter with the enhanced
    // keyboard protocol.
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    tracing::debug!(keyboard_enhanced, "Keyboard protocol detected");

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if keyboard_enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(input::keyboard_enhancement_flags())
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, Duration::from_millis(config.tick_ms)).await;

    // Restore terminal
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "Dashboard loop failed");
        eprintln!("Error: {}", err);
    }

    info!(
        commands = app.terminal().submitted(),
        "Tence dashboard stopped"
    );

    Ok(())
}

/// Main application loop.
///
/// Draw, wait up to one tick for input, apply at most one intent. Every
/// transition finishes before the next event is read.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<(), DashError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(tick)? {
            let event = event::read()?;
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);

            if let Some(intent) = input::map_event(app, &event, area) {
                tracing::trace!(?intent, "Dispatching intent");
                app.dispatch(intent);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
