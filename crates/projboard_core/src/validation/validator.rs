//! Stateless constraint evaluator.
//!
//! # Responsibility
//! - Evaluate `required`, length and numeric range constraints for one value.
//!
//! # Invariants
//! - Absent constraints are vacuously satisfied.
//! - Length constraints apply to text values only; numeric constraints apply
//!   to number values only. Mismatched combinations are skipped.
//! - All bounds are strict: `len > min_length`, `len < max_length`,
//!   `value > min`, `value < max`.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    Text(String),
    Number(f64),
}

impl Display for ValidatableValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ValidatableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ValidatableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ValidatableValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ValidatableValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// One value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidatableValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates a validatable value with no constraints.
    pub fn new(value: impl Into<ValidatableValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Returns `true` iff every configured constraint passes.
pub fn validate(input: &Validatable) -> bool {
    if input.required && input.value.to_string().trim().is_empty() {
        return false;
    }

    match &input.value {
        ValidatableValue::Text(text) => {
            // Length is measured in characters, not bytes.
            let len = text.chars().count();
            if input.min_length.is_some_and(|bound| len <= bound) {
                return false;
            }
            if input.max_length.is_some_and(|bound| len >= bound) {
                return false;
            }
        }
        ValidatableValue::Number(number) => {
            // NaN compares as `None`, so it fails every bound.
            if input
                .min
                .is_some_and(|bound| number.partial_cmp(&bound) != Some(Ordering::Greater))
            {
                return false;
            }
            if input
                .max
                .is_some_and(|bound| number.partial_cmp(&bound) != Some(Ordering::Less))
            {
                return false;
            }
        }
    }

    true
}
