/*!
 * Error types for the pastemd application.
 *
 * This module contains custom error types for the different stages of a
 * placement, using the thiserror crate for ergonomic error definitions.
 * Malformed inline markup is never an error: the cell parser degrades it
 * to literal text.
 */

use thiserror::Error;

/// Errors that can occur while placing a table into a target application
#[derive(Error, Debug)]
pub enum PlacerError {
    /// The target application has no automation bridge on this platform
    #[error("{0}")]
    Unsupported(String),

    /// The automation process ran and exited with a failure status
    #[error("Automation script failed (status {status:?}): {stderr}")]
    ExecutionFailed {
        /// Exit code, `None` when the process was killed by a signal
        status: Option<i32>,
        /// Captured diagnostic output
        stderr: String,
    },

    /// The automation process could not be started
    #[error("Failed to launch automation process: {0}")]
    LaunchFailed(String),

    /// The table has no rows or no columns
    #[error("Table is empty")]
    EmptyTable,
}

/// Errors that can occur when turning text into a table matrix
#[derive(Error, Debug)]
pub enum InputError {
    /// The input looked like JSON but could not be parsed
    #[error("Invalid JSON table: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed but is not an array of arrays
    #[error("Unexpected table shape: {0}")]
    Shape(String),

    /// The input contained no rows
    #[error("No table rows found in input")]
    Empty,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a placer
    #[error("Placement error: {0}")]
    Placer(#[from] PlacerError),

    /// Error from table input parsing
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error from the configuration layer
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
