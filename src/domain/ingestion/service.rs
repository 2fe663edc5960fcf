use super::error::IngestionError;
use super::filter::{skip_leading, INGESTION_SKIP_COUNT};
use super::model::{FeedEntry, StoredRecord};
use crate::infrastructure::feed::{decode_feed, FeedFetcher};
use crate::infrastructure::repositories::RecipeRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct IngestionService {
    fetcher: Arc<FeedFetcher>,
    recipe_repo: Arc<dyn RecipeRepository>,
    skip_count: usize,
}

impl IngestionService {
    pub fn new(fetcher: Arc<FeedFetcher>, recipe_repo: Arc<dyn RecipeRepository>) -> Self {
        Self {
            fetcher,
            recipe_repo,
            skip_count: INGESTION_SKIP_COUNT,
        }
    }

    pub fn with_skip_count(mut self, skip_count: usize) -> Self {
        self.skip_count = skip_count;
        self
    }

    pub fn skip_count(&self) -> usize {
        self.skip_count
    }
}

#[async_trait]
pub trait IngestionServiceApi: Send + Sync {
    /// Fetch and decode the feed at `url`, then persist every entry past the
    /// skip count. Returns all decoded entries, including the skipped ones.
    async fn ingest(&self, url: &str) -> Result<Vec<FeedEntry>, IngestionError>;

    /// Insert one record per entry, in order, stopping at the first failure.
    /// Records inserted before a failure stay in the store.
    async fn persist(&self, entries: &[FeedEntry]) -> Result<usize, IngestionError>;
}

#[async_trait]
impl IngestionServiceApi for IngestionService {
    async fn ingest(&self, url: &str) -> Result<Vec<FeedEntry>, IngestionError> {
        let body = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| IngestionError::Transport(e.to_string()))?;

        let entries = decode_feed(&body);
        tracing::info!(
            url,
            bytes = body.len(),
            entries = entries.len(),
            "Decoded feed"
        );

        let to_store = skip_leading(&entries, self.skip_count);
        let stored = self.persist(to_store).await?;
        tracing::info!(url, stored, "Ingested feed entries");

        Ok(entries)
    }

    async fn persist(&self, entries: &[FeedEntry]) -> Result<usize, IngestionError> {
        let mut stored = 0;
        for entry in entries {
            let record = StoredRecord::from(entry);
            let id = self
                .recipe_repo
                .insert(&record)
                .await
                .map_err(|e| IngestionError::Persistence(e.to_string()))?;
            tracing::debug!(id = %id, title = %record.title, "Inserted recipe");
            stored += 1;
        }
        Ok(stored)
    }
}
