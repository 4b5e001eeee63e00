//! Error types for estate-seed operations.
//!
//! Defines error types for the two failure domains of the tool:
//! - Startup configuration (missing environment variables)
//! - Remote document-database calls (transport, API, response parsing)

use thiserror::Error;

/// Errors that can occur while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required env variable: {0}")]
    MissingVar(&'static str),
}

/// Errors that can occur during document-database operations.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}
