//! LLM settings store.
//!
//! Updates follow a snapshot-then-replace pattern: the current [`Settings`]
//! is copied, exactly one field is changed, and the copy is installed only if
//! the new value is valid. Rejected input leaves the previous value in place.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Generation parameters shown in the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Settings {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 512,
        }
    }
}

/// One editable field of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SettingsField {
    Temperature,
    TopP,
    MaxTokens,
}

impl SettingsField {
    /// All fields in form order.
    pub const ALL: [SettingsField; 3] = [
        SettingsField::Temperature,
        SettingsField::TopP,
        SettingsField::MaxTokens,
    ];

    /// Get the form label.
    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Temperature => "Temperature",
            SettingsField::TopP => "Top P",
            SettingsField::MaxTokens => "Max Tokens",
        }
    }

    /// Increment used by stepping.
    pub fn step(&self) -> f64 {
        match self {
            SettingsField::Temperature | SettingsField::TopP => 0.1,
            SettingsField::MaxTokens => 1.0,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, SettingsField::MaxTokens)
    }

    /// Human-readable valid domain, used in error messages.
    fn expected(&self) -> &'static str {
        match self {
            SettingsField::Temperature => "at least 0",
            SettingsField::TopP => "between 0 and 1",
            SettingsField::MaxTokens => "at least 1",
        }
    }

    /// Inclusive valid range.
    fn bounds(&self) -> (f64, f64) {
        match self {
            SettingsField::Temperature => (0.0, f64::MAX),
            SettingsField::TopP => (0.0, 1.0),
            SettingsField::MaxTokens => (1.0, u32::MAX as f64),
        }
    }

    fn in_range(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction for stepping a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Rejected settings input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: SettingsField, input: String },

    #[error("{field}: '{input}' is not a whole number")]
    NotAnInteger { field: SettingsField, input: String },

    #[error("{field}: value must be finite")]
    NotFinite { field: SettingsField },

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: SettingsField,
        value: f64,
        expected: &'static str,
    },
}

impl SettingsError {
    /// The field the rejected input was meant for.
    pub fn field(&self) -> SettingsField {
        match self {
            SettingsError::NotANumber { field, .. }
            | SettingsError::NotAnInteger { field, .. }
            | SettingsError::NotFinite { field }
            | SettingsError::OutOfRange { field, .. } => *field,
        }
    }
}

impl Settings {
    /// Read one field as a number.
    pub fn get(&self, field: SettingsField) -> f64 {
        match field {
            SettingsField::Temperature => self.temperature,
            SettingsField::TopP => self.top_p,
            SettingsField::MaxTokens => self.max_tokens as f64,
        }
    }

    /// Copy of `self` with one field replaced, or an error if `value` is not
    /// valid for that field.
    pub fn with_field(self, field: SettingsField, value: f64) -> Result<Settings, SettingsError> {
        if !value.is_finite() {
            return Err(SettingsError::NotFinite { field });
        }
        if field.is_integer() && value.fract() != 0.0 {
            return Err(SettingsError::NotAnInteger {
                field,
                input: value.to_string(),
            });
        }
        if !field.in_range(value) {
            return Err(SettingsError::OutOfRange {
                field,
                value,
                expected: field.expected(),
            });
        }

        let mut next = self;
        match field {
            SettingsField::Temperature => next.temperature = value,
            SettingsField::TopP => next.top_p = value,
            SettingsField::MaxTokens => next.max_tokens = value as u32,
        }
        Ok(next)
    }

    /// Form text for one field.
    pub fn display_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::MaxTokens => self.max_tokens.to_string(),
            _ => format!("{}", self.get(field)),
        }
    }
}

/// Parse raw form text for `field`.
pub fn parse_input(field: SettingsField, input: &str) -> Result<f64, SettingsError> {
    let text = input.trim();
    if field.is_integer() {
        return match text.parse::<u32>() {
            Ok(value) => Ok(value as f64),
            // Numeric but not a u32: either a fraction or outside the range.
            Err(_) => match text.parse::<f64>() {
                Ok(value) if value.is_finite() && value.fract() == 0.0 => {
                    Err(SettingsError::OutOfRange {
                        field,
                        value,
                        expected: field.expected(),
                    })
                }
                Ok(_) => Err(SettingsError::NotAnInteger {
                    field,
                    input: input.to_string(),
                }),
                Err(_) => Err(SettingsError::NotANumber {
                    field,
                    input: input.to_string(),
                }),
            },
        };
    }

    let value = text.parse::<f64>().map_err(|_| SettingsError::NotANumber {
        field,
        input: input.to_string(),
    })?;
    if !value.is_finite() {
        return Err(SettingsError::NotFinite { field });
    }
    Ok(value)
}

/// Slack for values that sit on the step grid up to float error (0.7 / 0.1).
const GRID_TOLERANCE: f64 = 1e-9;

/// Owns the current [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: Settings,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Settings {
        self.current
    }

    /// Replace exactly one field.
    pub fn update(&mut self, field: SettingsField, value: f64) -> Result<Settings, SettingsError> {
        let next = self.current.with_field(field, value)?;
        self.current = next;
        tracing::debug!(field = %field, value, "Setting updated");
        Ok(next)
    }

    /// Parse form text and replace one field.
    pub fn update_from_input(
        &mut self,
        field: SettingsField,
        input: &str,
    ) -> Result<Settings, SettingsError> {
        let value = parse_input(field, input)?;
        self.update(field, value)
    }

    /// Move a field to the next multiple of its step in the given
    /// direction, clamped to the field's range.
    ///
    /// Off-grid values snap to the grid: 0.75 steps up to 0.8 and down to 0.7.
    pub fn nudge(&mut self, field: SettingsField, step: Step) -> Result<Settings, SettingsError> {
        let size = field.step();
        let units = self.current.get(field) / size;
        let target = match step {
            Step::Up => (units + GRID_TOLERANCE).floor() + 1.0,
            Step::Down => (units - GRID_TOLERANCE).ceil() - 1.0,
        };
        let (min, max) = field.bounds();
        // Keep one decimal so repeated 0.1 steps do not drift.
        let value = ((target * size * 10.0).round() / 10.0).clamp(min, max);
        self.update(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.top_p, 0.9);
        assert_eq!(settings.max_tokens, 512);
    }

    #[test]
    fn test_update_isolates_field() {
        let mut store = SettingsStore::default();
        store.update(SettingsField::Temperature, 1.2).unwrap();

        let current = store.current();
        assert_eq!(current.temperature, 1.2);
        assert_eq!(current.top_p, 0.9);
        assert_eq!(current.max_tokens, 512);
    }

    #[test]
    fn test_update_from_input() {
        let mut store = SettingsStore::default();
        store.update_from_input(SettingsField::TopP, "0.5").unwrap();
        store.update_from_input(SettingsField::MaxTokens, " 1024 ").unwrap();

        assert_eq!(store.current().top_p, 0.5);
        assert_eq!(store.current().max_tokens, 1024);
        assert_eq!(store.current().temperature, 0.7);
    }

    #[test]
    fn test_not_a_number_retains_previous() {
        let mut store = SettingsStore::default();
        let err = store
            .update_from_input(SettingsField::Temperature, "warm")
            .unwrap_err();
        assert!(matches!(err, SettingsError::NotANumber { .. }));
        assert_eq!(store.current(), Settings::default());

        let err = store.update_from_input(SettingsField::Temperature, "").unwrap_err();
        assert!(matches!(err, SettingsError::NotANumber { .. }));
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        let mut store = SettingsStore::default();
        for input in ["NaN", "inf", "-infinity"] {
            let err = store.update_from_input(SettingsField::TopP, input).unwrap_err();
            assert_eq!(err, SettingsError::NotFinite { field: SettingsField::TopP });
        }
        assert!(store.update(SettingsField::Temperature, f64::NAN).is_err());
        assert_eq!(store.current(), Settings::default());
    }

    #[test]
    fn test_max_tokens_must_be_whole() {
        let mut store = SettingsStore::default();
        let err = store
            .update_from_input(SettingsField::MaxTokens, "12.5")
            .unwrap_err();
        assert!(matches!(err, SettingsError::NotAnInteger { .. }));

        let err = store.update(SettingsField::MaxTokens, 3.5).unwrap_err();
        assert!(matches!(err, SettingsError::NotAnInteger { .. }));

        let err = store.update_from_input(SettingsField::MaxTokens, "-4").unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { value, .. } if value == -4.0));

        let err = store
            .update_from_input(SettingsField::MaxTokens, "5000000000")
            .unwrap_err();
        assert!(matches!(err, SettingsError::OutOfRange { .. }));
        assert_eq!(store.current().max_tokens, 512);
    }

    #[test]
    fn test_out_of_range() {
        let mut store = SettingsStore::default();
        assert!(matches!(
            store.update(SettingsField::TopP, 1.5),
            Err(SettingsError::OutOfRange { .. })
        ));
        assert!(matches!(
            store.update(SettingsField::Temperature, -0.1),
            Err(SettingsError::OutOfRange { .. })
        ));
        assert!(matches!(
            store.update_from_input(SettingsField::MaxTokens, "0"),
            Err(SettingsError::OutOfRange { .. })
        ));
        assert_eq!(store.current(), Settings::default());
    }

    #[test]
    fn test_nudge_steps() {
        let mut store = SettingsStore::default();
        store.nudge(SettingsField::Temperature, Step::Up).unwrap();
        assert_eq!(store.current().temperature, 0.8);

        store.nudge(SettingsField::MaxTokens, Step::Down).unwrap();
        assert_eq!(store.current().max_tokens, 511);

        store.nudge(SettingsField::TopP, Step::Up).unwrap();
        assert_eq!(store.current().top_p, 1.0);
        store.nudge(SettingsField::TopP, Step::Up).unwrap();
        assert_eq!(store.current().top_p, 1.0);
    }

    #[test]
    fn test_nudge_snaps_off_grid_values() {
        let mut store = SettingsStore::default();

        store.update(SettingsField::TopP, 0.96).unwrap();
        store.nudge(SettingsField::TopP, Step::Up).unwrap();
        assert_eq!(store.current().top_p, 1.0);

        store.update(SettingsField::TopP, 0.96).unwrap();
        store.nudge(SettingsField::TopP, Step::Down).unwrap();
        assert_eq!(store.current().top_p, 0.9);

        store.update(SettingsField::Temperature, 0.75).unwrap();
        store.nudge(SettingsField::Temperature, Step::Up).unwrap();
        assert_eq!(store.current().temperature, 0.8);

        store.update(SettingsField::Temperature, 0.75).unwrap();
        store.nudge(SettingsField::Temperature, Step::Down).unwrap();
        assert_eq!(store.current().temperature, 0.7);
    }

    #[test]
    fn test_nudge_clamps_at_bounds() {
        let mut store = SettingsStore::default();

        store.update(SettingsField::Temperature, 0.0).unwrap();
        store.nudge(SettingsField::Temperature, Step::Down).unwrap();
        assert_eq!(store.current().temperature, 0.0);

        store.update(SettingsField::MaxTokens, 1.0).unwrap();
        store.nudge(SettingsField::MaxTokens, Step::Down).unwrap();
        assert_eq!(store.current().max_tokens, 1);

        store.update(SettingsField::MaxTokens, u32::MAX as f64).unwrap();
        store.nudge(SettingsField::MaxTokens, Step::Up).unwrap();
        assert_eq!(store.current().max_tokens, u32::MAX);
    }

    #[test]
    fn test_error_field_and_message() {
        let err = parse_input(SettingsField::TopP, "abc").unwrap_err();
        assert_eq!(err.field(), SettingsField::TopP);
        assert_eq!(err.to_string(), "Top P: 'abc' is not a number");
    }
}
