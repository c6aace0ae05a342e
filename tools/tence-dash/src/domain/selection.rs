//! Agent selection state.

use super::Agent;

/// Zero-or-one selected agent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected; the modal is hidden.
    #[default]
    Empty,
    /// An agent is selected and its modal is showing.
    Showing(Agent),
}

/// Owns the current [`Selection`].
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an agent. Re-selecting the current agent is a no-op.
    pub fn select(&mut self, agent: &Agent) {
        if let Selection::Showing(current) = &self.selection {
            if current.id == agent.id {
                return;
            }
        }
        self.selection = Selection::Showing(agent.clone());
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selection = Selection::Empty;
    }

    /// The selected agent, if any.
    pub fn current(&self) -> Option<&Agent> {
        match &self.selection {
            Selection::Empty => None,
            Selection::Showing(agent) => Some(agent),
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.selection, Selection::Showing(_))
    }
}
