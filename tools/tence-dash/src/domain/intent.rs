//! Messages from views to the root controller.

use serde::Serialize;

use super::{AgentId, SettingsField, Step};

/// Focusable dashboard pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Pane {
    /// Agent list (left column).
    #[default]
    Agents,
    /// Command terminal.
    Terminal,
    /// Settings form.
    Settings,
}

impl Pane {
    /// Focus order for Tab.
    pub const ALL: [Pane; 3] = [Pane::Agents, Pane::Terminal, Pane::Settings];

    pub fn next(self) -> Pane {
        match self {
            Pane::Agents => Pane::Terminal,
            Pane::Terminal => Pane::Settings,
            Pane::Settings => Pane::Agents,
        }
    }

    pub fn prev(self) -> Pane {
        match self {
            Pane::Agents => Pane::Settings,
            Pane::Terminal => Pane::Agents,
            Pane::Settings => Pane::Terminal,
        }
    }
}

/// Row of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormField {
    Setting(SettingsField),
    PremiumKey,
}

impl Default for FormField {
    fn default() -> Self {
        FormField::Setting(SettingsField::Temperature)
    }
}

impl FormField {
    /// All rows in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Setting(SettingsField::Temperature),
        FormField::Setting(SettingsField::TopP),
        FormField::Setting(SettingsField::MaxTokens),
        FormField::PremiumKey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Setting(field) => field.label(),
            FormField::PremiumKey => "Premium Key",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// A request to change dashboard state.
///
/// Views and the input layer only ever produce intents; the root controller
/// is the only place they are applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Move focus to the next pane.
    FocusNext,
    /// Move focus to the previous pane.
    FocusPrev,
    /// Focus a specific pane.
    FocusPane(Pane),
    /// Focus a specific settings row.
    FocusField(FormField),
    /// Move the cursor of the focused list.
    MoveCursor(Step),
    /// Select an agent and open its modal.
    SelectAgent(AgentId),
    /// Select the agent under the list cursor.
    ActivateCursor,
    /// Close the agent modal.
    ClearSelection,
    /// Replace the terminal's pending input.
    SetPendingInput(String),
    /// Submit the pending terminal input.
    SubmitCommand,
    /// New raw text for a settings field.
    EditSetting { field: SettingsField, input: String },
    /// Step a numeric settings field.
    NudgeSetting { field: SettingsField, step: Step },
    /// New raw text for the premium-key field.
    SetPremiumKey(String),
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Leave the dashboard.
    Quit,
}
