//! Domain models for the dashboard.

mod agent;
mod app;
mod gate;
mod intent;
mod model;
mod selection;
mod settings;
mod terminal;

pub use agent::{Agent, AgentCatalog, AgentId, AgentStatus};
pub use app::{App, AppState, DashboardSnapshot, SettingsForm};
pub use gate::{CapabilityGate, PREMIUM_KEY};
pub use intent::{FormField, Intent, Pane};
pub use model::{ModelDescriptor, ModelRegistry, PREMIUM_TOKENS_PER_SECOND};
pub use selection::{Selection, SelectionController};
pub use settings::{parse_input, Settings, SettingsError, SettingsField, SettingsStore, Step};
pub use terminal::{TerminalSession, ECHO_PREFIX, PLACEHOLDER_RESPONSE};
