pub mod error;
pub mod filter;
pub mod model;
pub mod service;

pub use error::IngestionError;
pub use filter::{skip_leading, INGESTION_SKIP_COUNT};
pub use model::{EntryLink, EntryThumbnail, FeedEntry, StoredRecord};
pub use service::{IngestionService, IngestionServiceApi};

use serde::{Deserialize, Serialize};

/// Request body for POST /parse
///
/// A body without `url` binds to the empty string; the fetch then fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub url: String,
}
