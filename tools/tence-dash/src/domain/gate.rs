//! Premium capability gate.
//!
//! A plain equality check on whatever was typed into the premium-key field.
//! This is a feature toggle for the mockup, not a credential store: the key
//! is held as-is in process memory.

/// Key that unlocks the premium model.
pub const PREMIUM_KEY: &str = "1234";

/// Holds the entered premium key.
#[derive(Debug, Clone, Default)]
pub struct CapabilityGate {
    entered_key: String,
}

impl CapabilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw entered value. Any input is accepted, including "".
    pub fn set_key(&mut self, value: impl Into<String>) {
        self.entered_key = value.into();
    }

    /// Whether the entered key matches [`PREMIUM_KEY`] exactly.
    pub fn is_unlocked(&self) -> bool {
        self.entered_key == PREMIUM_KEY
    }

    pub fn entered_key(&self) -> &str {
        &self.entered_key
    }
}
