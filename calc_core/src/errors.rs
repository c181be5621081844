//! # Error Types
//!
//! Structured error types for calc_core. Division by zero is deliberately
//! absent: it is a calculation outcome (see [`crate::calculations::Outcome`]),
//! not a failure.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_operand(text: &str) -> CalcResult<f64> {
//!     text.parse().map_err(|_| CalcError::invalid_input("operand", text, "Not a number"))
//! }
//!
//! assert!(parse_operand("4.5").is_ok());
//! assert_eq!(parse_operand("x").unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be interpreted (operand, operator, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A requested file does not exist
    #[error("{path} not found.")]
    FileNotFound { path: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// The console reached end-of-input while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    /// Reading from or writing to the console failed
    #[error("Console error: {reason}")]
    Console { reason: String },

    /// JSON serialization/deserialization error
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

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        CalcError::FileNotFound { path: path.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Console error
    pub fn console(reason: impl Into<String>) -> Self {
        CalcError::Console { reason: reason.into() }
    }

    /// Map an I/O error on `path`, keeping "not found" distinct from other failures.
    pub fn from_io(operation: impl Into<String>, path: impl Into<String>, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            CalcError::file_not_found(path)
        } else {
            CalcError::file_error(operation, path, err.to_string())
        }
    }

    /// Check if the menu loop can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileNotFound { .. } | CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileNotFound { .. } => "FILE_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::InputClosed => "INPUT_CLOSED",
            CalcError::Console { .. } => "CONSOLE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
