//! Error types for the viewcull library
//!
//! Errors only occur at configuration time (building projection
//! parameters, parsing harness options). The per-frame extraction and
//! classification paths are total functions and never return errors.

use std::fmt;

/// Result type for viewcull operations
pub type Result<T> = std::result::Result<T, Error>;

/// Viewcull errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected perspective parameters (field of view, aspect ratio, clip distances)
    InvalidProjection(String),

    /// Invalid application/harness configuration
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
