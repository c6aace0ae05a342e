//! Local model status descriptors.

use serde::Serialize;

use super::CapabilityGate;

/// Throughput of the premium model once unlocked.
pub const PREMIUM_TOKENS_PER_SECOND: f32 = 30.0;

/// Display record for one local model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub running: bool,
    pub tokens_per_second: f32,
    pub log: String,
}

impl ModelDescriptor {
    pub fn new(name: &str, running: bool, tokens_per_second: f32, log: &str) -> Self {
        Self {
            name: name.to_string(),
            running,
            tokens_per_second,
            log: log.to_string(),
        }
    }

    /// Get the run-state label.
    pub fn state_label(&self) -> &'static str {
        if self.running {
            "Running"
        } else {
            "Stopped"
        }
    }

    /// Get the indicator character.
    pub fn indicator(&self) -> char {
        if self.running {
            '●'
        } else {
            '○'
        }
    }
}

/// Source of the model list.
///
/// Fixed models are held as-is. The premium model has no stored state at
/// all: its fields are derived from the gate on every [`ModelRegistry::list`].
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    fixed: Vec<ModelDescriptor>,
    premium_name: String,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelRegistry {
    pub fn new(fixed: Vec<ModelDescriptor>, premium_name: impl Into<String>) -> Self {
        Self {
            fixed,
            premium_name: premium_name.into(),
        }
    }

    /// The models every session starts with.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                ModelDescriptor::new("llama.cpp", true, 15.0, "ready"),
                ModelDescriptor::new("gguf model", false, 0.0, "stopped"),
                ModelDescriptor::new("ghost-core (phi-2)", true, 20.0, "training complete"),
            ],
            "ghost-pro",
        )
    }

    /// All models in display order, premium model last.
    pub fn list(&self, gate: &CapabilityGate) -> Vec<ModelDescriptor> {
        let mut models = self.fixed.clone();
        models.push(self.premium(gate));
        models
    }

    /// The gated premium model as seen through `gate` right now.
    pub fn premium(&self, gate: &CapabilityGate) -> ModelDescriptor {
        let unlocked = gate.is_unlocked();
        ModelDescriptor {
            name: self.premium_name.clone(),
            running: unlocked,
            tokens_per_second: if unlocked { PREMIUM_TOKENS_PER_SECOND } else { 0.0 },
            log: if unlocked { "ready" } else { "locked" }.to_string(),
        }
    }
}
