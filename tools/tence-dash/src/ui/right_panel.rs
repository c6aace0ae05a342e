//! Right panel: the stacked main column.
//!
//! Renders, top to bottom, the knowledge-graph placeholder, model status,
//! terminal and settings form.

use ratatui::Frame;

use crate::domain::{App, ModelDescriptor};

use super::layout::Regions;
use super::panels;

/// Render the main column.
pub fn render(frame: &mut Frame, regions: &Regions, app: &App, models: &[ModelDescriptor]) {
    panels::knowledge_graph::render(frame, regions.knowledge_graph);
    panels::model_status::render(frame, regions.models, models);
    panels::terminal::render(frame, regions.terminal, app);
    panels::settings::render(frame, regions.settings, app);
}
