//! estate-seed: database seeding tool for the estate listing app.
//!
//! This library clears and repopulates the app's Appwrite collections
//! (agents, reviews, galleries, properties) with randomized sample data.

// Core modules
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod seed;

// Re-export commonly used error types
pub use error::{ConfigError, DbError};
