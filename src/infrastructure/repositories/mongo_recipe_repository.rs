use super::recipe_repository::{RecipeRepository, RepositoryError};
use crate::domain::ingestion::StoredRecord;
use crate::infrastructure::db::{check_connection, DbHandle, RECIPES_COLLECTION};
use async_trait::async_trait;
use mongodb::bson::Bson;
use mongodb::Collection;
use std::sync::Arc;

pub struct MongoRecipeRepository {
    db: Arc<DbHandle>,
    collection: Collection<StoredRecord>,
}

impl MongoRecipeRepository {
    pub fn new(db: Arc<DbHandle>) -> Self {
        let collection = db.collection::<StoredRecord>(RECIPES_COLLECTION);
        Self { db, collection }
    }
}

#[async_trait]
impl RecipeRepository for MongoRecipeRepository {
    async fn insert(&self, record: &StoredRecord) -> Result<String, RepositoryError> {
        let result = self.collection.insert_one(record, None).await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        check_connection(&self.db).await?;
        Ok(())
    }
}
