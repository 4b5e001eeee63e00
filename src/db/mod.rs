//! Document-database access.
//!
//! The remote service is reached through the [`DocumentStore`] trait so the
//! seeding pipeline can run against the Appwrite REST API in production and
//! an in-memory store in tests.

mod appwrite;

pub use appwrite::AppwriteClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DbError;

/// Sentinel document id asking the server to assign a fresh unique id.
pub const UNIQUE_ID: &str = "unique()";

/// Handle to one stored document: its server-assigned id plus field map.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Operations the seeder needs from the document database.
///
/// All operations are scoped to the database configured on the
/// implementation; only the collection id varies per call.
#[async_trait]
pub trait DocumentStore {
    /// List all documents in a collection. One page is assumed to hold the
    /// whole collection.
    async fn list_documents(&self, collection_id: &str) -> Result<Vec<Document>, DbError>;

    /// Delete one document by id.
    async fn delete_document(&self, collection_id: &str, document_id: &str)
        -> Result<(), DbError>;

    /// Create a document with a server-assigned unique id and return it.
    async fn create_document(&self, collection_id: &str, data: Value)
        -> Result<Document, DbError>;
}
