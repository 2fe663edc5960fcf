use mongodb::bson::doc;
use mongodb::{Client, Database};

pub type DbHandle = Database;

/// Name of the collection every ingested entry is written to
pub const RECIPES_COLLECTION: &str = "recipes";

pub async fn connect(mongo_uri: &str, database: &str) -> Result<DbHandle, mongodb::error::Error> {
    let client = Client::with_uri_str(mongo_uri).await?;
    Ok(client.database(database))
}

pub async fn check_connection(db: &DbHandle) -> Result<bool, mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }, None).await.map(|_| true)
}
