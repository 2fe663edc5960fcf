pub mod decoder;
pub mod fetcher;

pub use decoder::decode_feed;
pub use fetcher::{FeedFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
