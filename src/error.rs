//! Error types for lexd
//!
//! Provides a unified error type for all operations.
//!
//! Domain outcomes (word not found, duplicate meaning, stale old meaning)
//! are not errors at this level: they travel back to the client as
//! `status: "error"` protocol responses. `LexError` covers the things
//! that can go wrong around the request/response cycle itself.

use thiserror::Error;

/// Result type alias using LexError
pub type Result<T> = std::result::Result<T, LexError>;

/// Unified error type for lexd operations
#[derive(Debug, Error)]
pub enum LexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Persistence error: {0}")]
    Persistence(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
