//! # Error Types
//!
//! Structured error types for bolt_core. The joint arithmetic itself never
//! fails (degenerate inputs show up as non-finite numbers in the result), so
//! these errors belong to the layers around it: catalog loading, catalog
//! lookups and resolving a catalog selection into calculation input.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{CalcError, CalcResult};
//!
//! fn require_pitch(pitch_mm: Option<f64>) -> CalcResult<f64> {
//!     pitch_mm.ok_or_else(|| CalcError::missing_field("pitch_mm"))
//! }
//!
//! assert!(require_pitch(None).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for the glue around the joint calculation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is physically meaningless (non-positive stiffness, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required value is missing, typically a "Custom" catalog entry
    /// selected without supplying the value manually
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Named entry not present in a catalog
    #[error("{catalog} entry not found: {name}")]
    EntryNotFound { catalog: String, name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON parsing or serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an EntryNotFound error
    pub fn entry_not_found(catalog: impl Into<String>, name: impl Into<String>) -> Self {
        CalcError::EntryNotFound {
            catalog: catalog.into(),
            name: name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::EntryNotFound { .. } => "ENTRY_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("bolt_stiffness_kn_per_mm", "0", "Stiffness must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("pitch_mm").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::entry_not_found("Thread", "M99").error_code(), "ENTRY_NOT_FOUND");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_entry_not_found_message() {
        let error = CalcError::entry_not_found("Material", "unobtainium");
        assert_eq!(error.to_string(), "Material entry not found: unobtainium");
    }
}
