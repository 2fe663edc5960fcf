use crate::domain::ingestion::StoredRecord;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("{0}")]
    Store(String),
}

/// Write access to the recipe collection.
///
/// Each insert is independent: no batching, no transaction, no uniqueness
/// check. The store assigns the document id.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert one record and return the id the store assigned to it
    async fn insert(&self, record: &StoredRecord) -> Result<String, RepositoryError>;

    /// Round-trip to the store, used by readiness checks
    async fn ping(&self) -> Result<(), RepositoryError>;
}
