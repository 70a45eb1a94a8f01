//! Validation outcome messages

use serde::{Deserialize, Serialize};

use crate::types::CustomerField;

/// Rule category, each mapped to a fixed message template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidatorType {
    Required,
    Unique,
    ValidFormat,
}

impl ValidatorType {
    /// Render the message for this category and field
    pub fn message(&self, field: CustomerField) -> String {
        match self {
            ValidatorType::Required => format!("{field} is required."),
            ValidatorType::Unique => format!("{field} should be unique."),
            ValidatorType::ValidFormat => format!("{field} is not in a valid format."),
        }
    }
}

/// Result of a validating operation, `success` iff `errors` is empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorResponse {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidatorResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }

    /// Single failure carrying a message that is not a rule violation
    pub fn failure(message: impl Into<String>) -> Self {
        Self::from_errors(vec![message.into()])
    }

    /// Append another response's errors, keeping order
    pub fn merge(mut self, other: ValidatorResponse) -> Self {
        self.errors.extend(other.errors);
        self.success = self.errors.is_empty();
        self
    }

    /// Errors formatted for display, one per line
    pub fn joined(&self) -> String {
        self.errors.join("\n")
    }
}
