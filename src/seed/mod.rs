//! The seeding pipeline.
//!
//! Clears the four target collections, then repopulates them in dependency
//! order: agents, reviews and galleries first, properties last so each
//! property can reference already-created documents. Every remote call is
//! awaited before the next is issued; the first failure aborts the run.

pub mod entities;
pub mod images;
pub mod sampler;

use rand::Rng;
use tracing::info;

use crate::config::CollectionIds;
use crate::db::{Document, DocumentStore};
use crate::error::DbError;

/// Number of agents created per run.
pub const AGENT_COUNT: usize = 5;

/// Number of reviews created per run.
pub const REVIEW_COUNT: usize = 20;

/// Number of properties created per run.
pub const PROPERTY_COUNT: usize = 20;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub agents: usize,
    pub reviews: usize,
    pub galleries: usize,
    pub properties: usize,
}

/// Drives one full seeding run against a document store.
pub struct Seeder<'a, S> {
    store: &'a S,
    collections: &'a CollectionIds,
}

impl<'a, S: DocumentStore> Seeder<'a, S> {
    pub fn new(store: &'a S, collections: &'a CollectionIds) -> Self {
        Self { store, collections }
    }

    /// Run the whole pipeline: clear every collection, then seed agents,
    /// reviews, galleries and properties in that order.
    pub async fn run<R: Rng>(&self, rng: &mut R) -> Result<SeedSummary, DbError> {
        self.clear_all().await?;

        let agents = self.seed_agents(rng).await?;
        let reviews = self.seed_reviews(rng).await?;
        let galleries = self.seed_galleries().await?;
        let properties = self
            .seed_properties(rng, &agents, &reviews, &galleries)
            .await?;

        let summary = SeedSummary {
            agents: agents.len(),
            reviews: reviews.len(),
            galleries: galleries.len(),
            properties,
        };
        info!(
            agents = summary.agents,
            reviews = summary.reviews,
            galleries = summary.galleries,
            properties = summary.properties,
            "Data seeding completed"
        );
        Ok(summary)
    }

    /// Delete every document in every target collection.
    async fn clear_all(&self) -> Result<(), DbError> {
        for collection_id in self.collections.all() {
            self.clear_collection(collection_id).await?;
        }
        info!("Cleared all existing data");
        Ok(())
    }

    /// Delete the documents of one collection, one at a time. A failed
    /// delete aborts the run and leaves the collection partially cleared.
    async fn clear_collection(&self, collection_id: &str) -> Result<(), DbError> {
        let documents = self.store.list_documents(collection_id).await?;
        for document in &documents {
            self.store
                .delete_document(collection_id, &document.id)
                .await?;
        }
        Ok(())
    }

    async fn seed_agents<R: Rng>(&self, rng: &mut R) -> Result<Vec<Document>, DbError> {
        let mut agents = Vec::with_capacity(AGENT_COUNT);
        for index in 1..=AGENT_COUNT {
            let agent = self
                .store
                .create_document(&self.collections.agents, entities::agent(rng, index))
                .await?;
            agents.push(agent);
        }
        info!(count = agents.len(), "Seeded agents");
        Ok(agents)
    }

    async fn seed_reviews<R: Rng>(&self, rng: &mut R) -> Result<Vec<Document>, DbError> {
        let mut reviews = Vec::with_capacity(REVIEW_COUNT);
        for index in 1..=REVIEW_COUNT {
            let review = self
                .store
                .create_document(&self.collections.reviews, entities::review(rng, index))
                .await?;
            reviews.push(review);
        }
        info!(count = reviews.len(), "Seeded reviews");
        Ok(reviews)
    }

    /// One gallery record per entry of the gallery image pool, in pool order.
    async fn seed_galleries(&self) -> Result<Vec<Document>, DbError> {
        let mut galleries = Vec::with_capacity(images::GALLERY_IMAGES.len());
        for image in images::GALLERY_IMAGES {
            let gallery = self
                .store
                .create_document(&self.collections.galleries, entities::gallery(image))
                .await?;
            galleries.push(gallery);
        }
        info!(count = galleries.len(), "Seeded galleries");
        Ok(galleries)
    }

    async fn seed_properties<R: Rng>(
        &self,
        rng: &mut R,
        agents: &[Document],
        reviews: &[Document],
        galleries: &[Document],
    ) -> Result<usize, DbError> {
        let agent_ids = ids(agents);
        let review_ids = ids(reviews);
        let gallery_ids = ids(galleries);

        for index in 1..=PROPERTY_COUNT {
            let data = entities::property(rng, index, &agent_ids, &review_ids, &gallery_ids);
            let property = self
                .store
                .create_document(&self.collections.properties, data)
                .await?;
            info!(id = %property.id, "Seeded Property {index}");
        }
        Ok(PROPERTY_COUNT)
    }
}

fn ids(documents: &[Document]) -> Vec<String> {
    documents.iter().map(|d| d.id.clone()).collect()
}
