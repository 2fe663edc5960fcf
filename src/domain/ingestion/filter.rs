use super::model::FeedEntry;

/// Number of leading decoded entries that are never persisted.
///
/// The source feeds have always been ingested this way; the reason for the
/// two dropped entries is unknown. Override per service with
/// `IngestionService::with_skip_count`.
pub const INGESTION_SKIP_COUNT: usize = 2;

/// Returns `entries` without the first `count` elements, or an empty slice
/// when there are not enough entries.
pub fn skip_leading(entries: &[FeedEntry], count: usize) -> &[FeedEntry] {
    entries.get(count..).unwrap_or(&[])
}
