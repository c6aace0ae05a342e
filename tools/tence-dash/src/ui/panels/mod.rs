//! Main-column panel renderers.
//!
//! Each panel renders from a read-only view of [`crate::domain::App`] and
//! never changes state.

pub mod knowledge_graph;
pub mod model_status;
pub mod settings;
pub mod terminal;
