//! # Error Types
//!
//! Structured error types for takeoff_core. The engine itself is total over
//! well-formed input structs; these errors surface at the boundaries:
//! caller-side schema validation and JSON request parsing.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_width(width_m: f64) -> EstimateResult<()> {
//!     if width_m < 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "width",
//!             width_m.to_string(),
//!             "Dimension cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for takeoff_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
///
/// Each variant carries enough context for a request handler to build a
/// useful 400 response without string-matching on messages.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// An input value is invalid (negative, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A structurally required field or section is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The request body could not be parsed into a building spec
    #[error("Invalid spec: {reason}")]
    InvalidSpec { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EstimateError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidSpec error
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        EstimateError::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::MissingField { .. } => "MISSING_FIELD",
            EstimateError::InvalidSpec { .. } => "INVALID_SPEC",
            EstimateError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("width", "-5.0", "Dimension cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::missing_field("foundation").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            EstimateError::invalid_spec("not json").error_code(),
            "INVALID_SPEC"
        );
    }

    #[test]
    fn test_error_display() {
        let error = EstimateError::missing_field("walls");
        assert_eq!(error.to_string(), "Missing required field: walls");
    }
}
