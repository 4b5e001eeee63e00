//! Environment-derived configuration.
//!
//! All connection settings come from the environment (optionally via a
//! `.env.local` file) and are collected into an explicit [`SeedConfig`]
//! once at startup, before any network call is attempted.

use std::env;

use crate::error::ConfigError;

/// Ids of the four seeded collections.
#[derive(Debug, Clone)]
pub struct CollectionIds {
    pub agents: String,
    pub reviews: String,
    pub galleries: String,
    pub properties: String,
}

impl CollectionIds {
    /// All collection ids, in clearing order.
    pub fn all(&self) -> [&str; 4] {
        [
            &self.agents,
            &self.reviews,
            &self.galleries,
            &self.properties,
        ]
    }
}

/// Connection settings for the target Appwrite project.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Base URL of the Appwrite API (e.g. "https://cloud.appwrite.io/v1").
    pub endpoint: String,
    /// Appwrite project id.
    pub project_id: String,
    /// Database holding the four collections.
    pub database_id: String,
    /// Server API key with documents read/write scope.
    pub api_key: String,
    /// Target collection ids.
    pub collections: CollectionIds,
}

impl SeedConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `.env.local` first if present, then requires every variable
    /// below. Returns [`ConfigError::MissingVar`] for the first absent one.
    ///
    /// Required variables:
    /// - `APPWRITE_ENDPOINT`
    /// - `APPWRITE_PROJECT_ID`
    /// - `APPWRITE_DATABASE_ID`
    /// - `APPWRITE_AGENTS_COLLECTION_ID`
    /// - `APPWRITE_REVIEWS_COLLECTION_ID`
    /// - `APPWRITE_GALLERIES_COLLECTION_ID`
    /// - `APPWRITE_PROPERTIES_COLLECTION_ID`
    /// - `APPWRITE_API_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename(".env.local").ok();

        Ok(Self {
            endpoint: require("APPWRITE_ENDPOINT")?,
            project_id: require("APPWRITE_PROJECT_ID")?,
            database_id: require("APPWRITE_DATABASE_ID")?,
            api_key: require("APPWRITE_API_KEY")?,
            collections: CollectionIds {
                agents: require("APPWRITE_AGENTS_COLLECTION_ID")?,
                reviews: require("APPWRITE_REVIEWS_COLLECTION_ID")?,
                galleries: require("APPWRITE_GALLERIES_COLLECTION_ID")?,
                properties: require("APPWRITE_PROPERTIES_COLLECTION_ID")?,
            },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
