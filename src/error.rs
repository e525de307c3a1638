//! Error types for the JSON Lines callback.
//!
//! This module defines the error types used throughout the crate, providing
//! rich error information for debugging and for the host runtime's own
//! error-reporting path.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for callback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the JSON Lines callback.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error (e.g., the required pipe-path variable is missing).
    ///
    /// Raised before any I/O occurs; the plugin cannot start without a
    /// destination for its event stream.
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Pipe Errors
    // ========================================================================
    /// The event pipe could not be opened for writing.
    ///
    /// Fatal: there is no retry. On a FIFO this covers a missing path and
    /// permission problems; the open itself blocks until a reader attaches.
    #[error("Failed to open event pipe '{path}': {source}")]
    PipeOpen {
        /// Path to the pipe that could not be opened
        path: PathBuf,
        /// Source error
        #[source]
        source: std::io::Error,
    },

    /// An event was emitted after the sink was closed.
    #[error("Event sink is already closed")]
    SinkClosed,

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// IO error on write or flush (e.g., the consumer disconnected mid-run).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a new pipe-open error.
    pub fn pipe_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PipeOpen {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error occurred before any I/O was attempted.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
