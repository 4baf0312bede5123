//! Error types for subnet calculations.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalculationError>;

/// Everything that can go wrong while turning raw input into a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Please enter a valid IP address")]
    EmptyInput,

    #[error("Invalid {field}: '{value}'")]
    InvalidFormat { field: String, value: String },

    #[error("Too many subnets: {count} exceeds the limit of {limit}")]
    TooManySubnets { count: u64, limit: u64 },

    #[error("Invalid configuration value {key}='{value}'")]
    InvalidConfig { key: String, value: String },
}

impl CalculationError {
    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        CalculationError::InvalidFormat {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Text shown to the user by the presentation layer.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
