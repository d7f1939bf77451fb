//! Error types for the pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the pokedex CLI.
///
/// Command callbacks return this; the REPL prints the error and keeps
/// running. The cache itself is infallible apart from construction-time
/// validation (`InvalidInterval`).
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Network-level HTTP failure (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("response failed with status code {code} and body: {body}")]
    Status {
        /// HTTP status code returned by the server
        code: u16,
        /// Response body, included verbatim for diagnostics
        body: String,
    },

    /// Response body could not be decoded into the expected model
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Command invoked with the wrong number of arguments
    #[error("expected {expected} arguments, got {got}")]
    Usage {
        /// Number of arguments the command takes
        expected: usize,
        /// Number of arguments actually supplied
        got: usize,
    },

    /// Pokemon has not been caught yet
    #[error("you haven't caught {0} yet")]
    NotCaught(String),

    /// Pokemon is already in the pokedex
    #[error("you already caught {0}")]
    AlreadyCaught(String),

    /// Cache constructed with a zero expiry interval
    #[error("cache interval must be a positive duration")]
    InvalidInterval,
}

// == Result Type Alias ==
/// Convenience Result type for the pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
