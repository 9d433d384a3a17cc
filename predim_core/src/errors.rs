//! # Error Types
//!
//! Structured error types for predim_core. The engine has exactly one
//! failure mode: an input that violates its physical constraints. Every
//! calculator downstream of validation is infallible.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if !(span_m > 0.0) {
//!         return Err(CalcError::invalid_input(
//!             "beam_span_m",
//!             span_m.to_string(),
//!             "must be > 0",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for predim_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation requests.
///
/// Serializes as `{"type": "InvalidInput", "details": {...}}` so a front end
/// can surface the offending field without parsing the message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of range or not a finite number
    #[error("Invalid input for '{field}': {value} - {field} {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field (dotted for nested fields)
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("floor_height_m", "0", "must be > 0");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_message_names_field() {
        let error = CalcError::invalid_input("floor_height_m", "0", "must be > 0");
        assert_eq!(error.field(), "floor_height_m");
        assert!(error.to_string().contains("floor_height_m must be > 0"));
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }
}
