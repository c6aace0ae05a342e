//! Tence Dash: Tence AI Dashboard in the terminal
//!
//! A TUI dashboard listing local agents, local model status, a command
//! terminal and the LLM settings form.
//!
//! ## Architecture
//!
//! One root controller ([`domain::App`]) owns every piece of session state.
//! Renderers in [`ui`] take `&App` and only draw; [`input`] turns terminal
//! events into [`domain::Intent`]s, which the event loop feeds back into
//! [`domain::App::dispatch`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  TENCE AI DASHBOARD                                             │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  AGENTS                │  KNOWLEDGE GRAPH                       │
//! │  [1] ○ Planner         │  LOCAL MODEL STATUS                    │
//! │  [2] ● Worker          │  TERMINAL                              │
//! ├────────────────────────┤                                        │
//! │  SESSION               │  LLM SETTINGS                          │
//! └────────────────────────┴────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted: all state lives for one run of the process.

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod telemetry;
pub mod ui;

pub use config::DashConfig;
pub use domain::{
    Agent, AgentCatalog, App, AppState, CapabilityGate, DashboardSnapshot, Intent,
    ModelDescriptor, ModelRegistry, Pane, SelectionController, Settings, SettingsError,
    SettingsField, SettingsStore, TerminalSession,
};
pub use error::DashError;
