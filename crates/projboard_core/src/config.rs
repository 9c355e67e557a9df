//! Board configuration.
//!
//! # Responsibility
//! - Hold the form validation rules and listener failure policy.
//! - Parse host-provided JSON overrides on top of defaults.
//!
//! # Invariants
//! - Defaults reproduce the stock form: title required, description longer
//!   than 5 characters, 1..=5 people.
//! - A rule never carries an empty range (`min >= max`).

use crate::validation::validator::{Validatable, ValidatableValue};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How the store reacts when a listener reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerFailurePolicy {
    /// Log the failure and keep notifying the remaining listeners.
    #[default]
    Isolate,
    /// Stop notifying and return the first failure to the caller.
    FailFast,
}

/// Constraint set applied to one form field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRule {
    /// Binds this rule to a concrete value.
    pub fn to_validatable(&self, value: impl Into<ValidatableValue>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min >= max {
                return Err(ConfigError::InvalidRule {
                    field,
                    reason: format!("min_length ({min}) must be < max_length ({max})"),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min >= max {
                return Err(ConfigError::InvalidRule {
                    field,
                    reason: format!("min ({min}) must be < max ({max})"),
                });
            }
        }
        Ok(())
    }
}

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: FieldRule,
    pub description: FieldRule,
    pub people: FieldRule,
    pub listener_failure: ListenerFailurePolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: FieldRule {
                required: true,
                ..FieldRule::default()
            },
            description: FieldRule {
                required: true,
                min_length: Some(5),
                ..FieldRule::default()
            },
            // Bounds are exclusive, so (0, 6) admits 1..=5.
            people: FieldRule {
                required: true,
                min: Some(0.0),
                max: Some(6.0),
                ..FieldRule::default()
            },
            listener_failure: ListenerFailurePolicy::Isolate,
        }
    }
}

impl BoardConfig {
    /// Parses a JSON object; omitted keys keep their defaults.
    ///
    /// An empty or whitespace-only string yields the default config.
    ///
    /// # Errors
    /// - Returns `InvalidJson` for malformed input.
    /// - Returns `InvalidRule` when a rule has an empty range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::InvalidJson)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field rule for empty ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.title.check("title")?;
        self.description.check("description")?;
        self.people.check("people")?;
        Ok(())
    }
}

/// Configuration load errors.
#[derive(Debug)]
pub enum ConfigError {
    InvalidJson(serde_json::Error),
    InvalidRule { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(err) => write!(f, "invalid board config json: {err}"),
            Self::InvalidRule { field, reason } => {
                write!(f, "invalid rule for `{field}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidJson(err) => Some(err),
            Self::InvalidRule { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, ListenerFailurePolicy};

    #[test]
    fn empty_json_yields_defaults() {
        let config = BoardConfig::from_json("  ").expect("empty config");
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_named_keys() {
        let config = BoardConfig::from_json(
            r#"{"listener_failure":"fail_fast","people":{"required":true,"min":0,"max":10}}"#,
        )
        .expect("partial config");
        assert_eq!(config.listener_failure, ListenerFailurePolicy::FailFast);
        assert_eq!(config.people.max, Some(10.0));
        assert_eq!(config.description.min_length, Some(5));
    }

    #[test]
    fn rejects_empty_range() {
        let err = BoardConfig::from_json(r#"{"people":{"min":6,"max":6}}"#)
            .expect_err("empty range must fail");
        assert!(matches!(err, ConfigError::InvalidRule { field: "people", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BoardConfig::from_json("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}
