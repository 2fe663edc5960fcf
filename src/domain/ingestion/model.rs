use serde::{Deserialize, Serialize};

/// One syndication item, as decoded from the feed document.
///
/// Missing fields are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: EntryLink,
    pub thumbnail: EntryThumbnail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLink {
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryThumbnail {
    pub url: String,
}

impl FeedEntry {
    pub fn new(
        title: impl Into<String>,
        link_href: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: EntryLink {
                href: link_href.into(),
            },
            thumbnail: EntryThumbnail {
                url: thumbnail_url.into(),
            },
        }
    }
}

/// Document written to the `recipes` collection, one per ingested entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub title: String,
    pub thumbnail: String,
    pub url: String,
}

impl From<&FeedEntry> for StoredRecord {
    fn from(entry: &FeedEntry) -> Self {
        Self {
            title: entry.title.clone(),
            thumbnail: entry.thumbnail.url.clone(),
            url: entry.link.href.clone(),
        }
    }
}
