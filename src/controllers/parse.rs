use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::ingestion::{FeedEntry, IngestionService, IngestionServiceApi, ParseRequest},
    error::{AppError, AppResult},
};

pub struct ParseController {
    ingestion_service: Arc<IngestionService>,
}

impl ParseController {
    pub fn new(ingestion_service: Arc<IngestionService>) -> Self {
        Self { ingestion_service }
    }

    /// POST /parse - Fetch a feed, store its entries, echo every decoded entry
    ///
    /// The response also lists the leading entries that were skipped and
    /// not stored. The body is read as JSON whatever the Content-Type says.
    pub async fn parse(
        State(controller): State<Arc<ParseController>>,
        body: Result<Bytes, BytesRejection>,
    ) -> AppResult<Json<Vec<FeedEntry>>> {
        let body = body.map_err(|e| AppError::Validation(e.body_text()))?;
        let request: ParseRequest =
            serde_json::from_slice(&body).map_err(|e| AppError::Validation(e.to_string()))?;

        let entries = controller
            .ingestion_service
            .ingest(&request.url)
            .await?;
        Ok(Json(entries))
    }
}
