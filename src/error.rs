//! Error types for Descartes.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Descartes operations.
pub type Result<T> = std::result::Result<T, DescartesError>;

/// Errors that can occur in Descartes.
#[derive(Debug, Error)]
pub enum DescartesError {
    /// Input text does not have the required shape (`y = ...` or `min, max`).
    #[error("{message}")]
    Format { message: String },

    /// Right-hand side does not parse as a mathematical expression.
    #[error("Invalid function: {message}")]
    Parse { message: String },

    /// Plot requested with no stored functions.
    #[error("No functions to plot. Please add functions first.")]
    EmptyInput,

    /// A stored function cannot be evaluated over the sample grid.
    #[error("Could not plot function '{label}': {message}")]
    Evaluation { label: String, message: String },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DescartesError {
    /// Create a Format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a Parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an Evaluation error for the function with the given label.
    pub fn evaluation(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Evaluation {
            label: label.into(),
            message: message.into(),
        }
    }
}
