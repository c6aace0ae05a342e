//! Agent domain models and the built-in agent catalog.

use std::fmt;

use serde::Serialize;

/// Unique identifier of an agent within a catalog.
pub type AgentId = u32;

/// Reported status of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AgentStatus {
    /// Agent is waiting for work.
    Idle,
    /// Agent is executing a task.
    Running,
    /// Any other status reported as free text.
    Other(String),
}

impl AgentStatus {
    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            AgentStatus::Idle => "Idle",
            AgentStatus::Running => "Running",
            AgentStatus::Other(label) => label,
        }
    }

    /// Get the indicator character.
    pub fn indicator(&self) -> char {
        match self {
            AgentStatus::Idle => '○',
            AgentStatus::Running => '●',
            AgentStatus::Other(_) => '◌',
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named agent shown in the agent list and the detail modal.
///
/// Agents are plain data: created once when the catalog is built and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub role: String,
    pub status: AgentStatus,
    pub description: String,
}

impl Agent {
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        role: impl Into<String>,
        status: AgentStatus,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            status,
            description: description.into(),
        }
    }
}

/// Ordered, fixed list of agents for the session.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    agents: Vec<Agent>,
}

impl Default for AgentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AgentCatalog {
    /// Create a catalog from an explicit list of agents.
    ///
    /// Agents with an id already present in the list are dropped so that ids
    /// stay unique.
    pub fn new(agents: Vec<Agent>) -> Self {
        let mut unique: Vec<Agent> = Vec::with_capacity(agents.len());
        for agent in agents {
            if unique.iter().any(|a| a.id == agent.id) {
                tracing::warn!(agent_id = agent.id, "Duplicate agent id dropped from catalog");
                continue;
            }
            unique.push(agent);
        }
        Self { agents: unique }
    }

    /// The catalog every dashboard session starts with.
    pub fn builtin() -> Self {
        Self::new(vec![
            Agent::new(1, "Planner", "Planning", AgentStatus::Idle, "Plans tasks"),
            Agent::new(2, "Worker", "Execution", AgentStatus::Running, "Executes tasks"),
        ])
    }

    /// All agents in display order.
    pub fn list(&self) -> &[Agent] {
        &self.agents
    }

    /// List position of the agent with `id`.
    pub fn position(&self, id: AgentId) -> Option<usize> {
        self.agents.iter().position(|a| a.id == id)
    }

    /// Agent at a list position.
    pub fn at(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
