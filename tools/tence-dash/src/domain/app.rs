//! Root controller: owns every piece of dashboard state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    Agent, AgentCatalog, AgentId, CapabilityGate, FormField, Intent, ModelDescriptor,
    ModelRegistry, Pane, SelectionController, Settings, SettingsError, SettingsField,
    SettingsStore, Step, TerminalSession,
};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main dashboard view.
    #[default]
    Dashboard,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Raw text of the settings form and the last rejection per field.
///
/// The store keeps the last valid value; the form keeps whatever the user
/// typed so an invalid entry can still be corrected in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    buffers: HashMap<SettingsField, String>,
    errors: HashMap<SettingsField, SettingsError>,
}

impl SettingsForm {
    fn from_settings(settings: &Settings) -> Self {
        let buffers = SettingsField::ALL
            .iter()
            .map(|&field| (field, settings.display_value(field)))
            .collect();
        Self {
            buffers,
            errors: HashMap::new(),
        }
    }

    /// Text currently in the field.
    pub fn buffer(&self, field: SettingsField) -> &str {
        self.buffers.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Why the field's text was rejected, if it was.
    pub fn error(&self, field: SettingsField) -> Option<&SettingsError> {
        self.errors.get(&field)
    }
}

/// Serializable copy of everything the views render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub agents: Vec<Agent>,
    pub selected: Option<Agent>,
    pub models: Vec<ModelDescriptor>,
    pub premium_unlocked: bool,
    pub terminal_log: Vec<String>,
    pub pending_input: String,
    pub settings: Settings,
    pub focus: Pane,
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    catalog: AgentCatalog,
    selection: SelectionController,
    gate: CapabilityGate,
    models: ModelRegistry,
    terminal: TerminalSession,
    settings: SettingsStore,
    form: SettingsForm,
    focus: Pane,
    agent_cursor: usize,
    form_cursor: FormField,
    started_at: DateTime<Utc>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default(), TerminalSession::new())
    }
}

impl App {
    /// Create a new application instance with the built-in catalogs.
    pub fn new(settings: Settings, terminal: TerminalSession) -> Self {
        Self::with_catalog(AgentCatalog::builtin(), ModelRegistry::builtin(), settings, terminal)
    }

    pub fn with_catalog(
        catalog: AgentCatalog,
        models: ModelRegistry,
        settings: Settings,
        terminal: TerminalSession,
    ) -> Self {
        Self {
            state: AppState::Dashboard,
            catalog,
            selection: SelectionController::new(),
            gate: CapabilityGate::new(),
            models,
            terminal,
            settings: SettingsStore::new(settings),
            form: SettingsForm::from_settings(&settings),
            focus: Pane::Agents,
            agent_cursor: 0,
            form_cursor: FormField::default(),
            started_at: Utc::now(),
        }
    }

    /// Apply one intent. Every transition completes before this returns.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::FocusNext => self.focus = self.focus.next(),
            Intent::FocusPrev => self.focus = self.focus.prev(),
            Intent::FocusPane(pane) => self.focus = pane,
            Intent::FocusField(field) => {
                self.focus = Pane::Settings;
                self.form_cursor = field;
            }
            Intent::MoveCursor(step) => self.move_cursor(step),
            Intent::SelectAgent(id) => self.select_agent(id),
            Intent::ActivateCursor => {
                if let Some(id) = self.catalog.at(self.agent_cursor).map(|a| a.id) {
                    self.select_agent(id);
                }
            }
            Intent::ClearSelection => {
                if self.selection.is_showing() {
                    tracing::debug!("Agent modal closed");
                }
                self.selection.clear();
            }
            Intent::SetPendingInput(value) => self.terminal.set_pending_input(value),
            Intent::SubmitCommand => self.terminal.submit_pending(),
            Intent::EditSetting { field, input } => self.edit_setting(field, input),
            Intent::NudgeSetting { field, step } => match self.settings.nudge(field, step) {
                Ok(settings) => {
                    self.form.buffers.insert(field, settings.display_value(field));
                    self.form.errors.remove(&field);
                }
                Err(err) => self.reject_setting(err),
            },
            Intent::SetPremiumKey(value) => self.set_premium_key(value),
            Intent::ToggleHelp => {
                self.state = match self.state {
                    AppState::Help => AppState::Dashboard,
                    _ => AppState::Help,
                };
            }
            Intent::Quit => self.state = AppState::Quit,
        }
    }

    fn move_cursor(&mut self, step: Step) {
        match self.focus {
            Pane::Agents => {
                let len = self.catalog.len();
                if len == 0 {
                    return;
                }
                self.agent_cursor = match step {
                    Step::Up if self.agent_cursor == 0 => len - 1,
                    Step::Up => self.agent_cursor - 1,
                    Step::Down => (self.agent_cursor + 1) % len,
                };
            }
            Pane::Settings => {
                let len = FormField::ALL.len();
                let idx = self.form_cursor.index();
                let next = match step {
                    Step::Up => (idx + len - 1) % len,
                    Step::Down => (idx + 1) % len,
                };
                self.form_cursor = FormField::ALL[next];
            }
            Pane::Terminal => {}
        }
    }

    fn select_agent(&mut self, id: AgentId) {
        let Some(index) = self.catalog.position(id) else {
            tracing::warn!(agent_id = id, "Select requested for unknown agent");
            return;
        };
        self.agent_cursor = index;
        let agent = &self.catalog.list()[index];
        self.selection.select(agent);
        tracing::debug!(agent_id = id, agent = %agent.name, "Agent selected");
    }

    fn edit_setting(&mut self, field: SettingsField, input: String) {
        let result = self.settings.update_from_input(field, &input);
        self.form.buffers.insert(field, input);
        match result {
            Ok(_) => {
                self.form.errors.remove(&field);
            }
            Err(err) => self.reject_setting(err),
        }
    }

    fn reject_setting(&mut self, err: SettingsError) {
        tracing::warn!(field = %err.field(), error = %err, "Settings input rejected");
        self.form.errors.insert(err.field(), err);
    }

    fn set_premium_key(&mut self, value: String) {
        let was_unlocked = self.gate.is_unlocked();
        self.gate.set_key(value);
        let unlocked = self.gate.is_unlocked();
        if unlocked != was_unlocked {
            tracing::info!(unlocked, "Premium model gate changed");
        }
    }

    // === Read-only accessors for views ===

    pub fn agents(&self) -> &[Agent] {
        self.catalog.list()
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.selection.current()
    }

    /// Model list, derived from the gate on every call.
    pub fn models(&self) -> Vec<ModelDescriptor> {
        self.models.list(&self.gate)
    }

    pub fn premium_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn premium_key(&self) -> &str {
        self.gate.entered_key()
    }

    pub fn terminal(&self) -> &TerminalSession {
        &self.terminal
    }

    pub fn settings(&self) -> Settings {
        self.settings.current()
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn agent_cursor(&self) -> usize {
        self.agent_cursor
    }

    pub fn form_cursor(&self) -> FormField {
        self.form_cursor
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whether the agent modal is open.
    pub fn modal_open(&self) -> bool {
        self.selection.is_showing()
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    /// Owned copy of the rendered state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            agents: self.catalog.list().to_vec(),
            selected: self.selection.current().cloned(),
            models: self.models(),
            premium_unlocked: self.gate.is_unlocked(),
            terminal_log: self.terminal.log().map(str::to_string).collect(),
            pending_input: self.terminal.pending_input().to_string(),
            settings: self.settings.current(),
            focus: self.focus,
        }
    }
}
