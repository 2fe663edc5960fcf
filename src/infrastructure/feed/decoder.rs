use crate::domain::ingestion::FeedEntry;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

// Element depths counted from the document root (depth 1).
const ENTRY_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// Decode a feed document into its entries.
///
/// Entries are the root's direct `entry` children; inside each, the direct
/// `title`, `link@href` and `thumbnail@url` children are read. Names match
/// on local name, so namespace prefixes are ignored.
///
/// Malformed input never fails: decoding stops at the first XML error and
/// the entries completed so far are returned.
pub fn decode_feed(bytes: &[u8]) -> Vec<FeedEntry> {
    let mut entries = Vec::new();
    if let Err(err) = decode_into(bytes, &mut entries) {
        tracing::debug!(
            error = %err,
            decoded = entries.len(),
            "Discarding feed decode error"
        );
    }
    entries
}

fn decode_into(bytes: &[u8], entries: &mut Vec<FeedEntry>) -> quick_xml::Result<()> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut depth = 0usize;
    let mut current: Option<FeedEntry> = None;
    let mut title: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                if depth == ENTRY_DEPTH && is_named(&e, b"entry") {
                    current = Some(FeedEntry::default());
                } else if depth == FIELD_DEPTH {
                    if let Some(entry) = current.as_mut() {
                        if is_named(&e, b"title") {
                            title = Some(String::new());
                        } else {
                            read_attributes(entry, &e)?;
                        }
                    }
                }
            }
            Event::Empty(e) => {
                // An empty root is a whole (entry-less) feed.
                if depth == 0 {
                    return Ok(());
                }
                let level = depth + 1;
                if level == ENTRY_DEPTH && is_named(&e, b"entry") {
                    entries.push(FeedEntry::default());
                } else if level == FIELD_DEPTH {
                    if let Some(entry) = current.as_mut() {
                        if is_named(&e, b"title") {
                            entry.title.clear();
                        } else {
                            read_attributes(entry, &e)?;
                        }
                    }
                }
            }
            Event::Text(e) => {
                if depth == FIELD_DEPTH {
                    if let Some(text) = title.as_mut() {
                        text.push_str(&e.unescape()?);
                    }
                }
            }
            Event::CData(e) => {
                if depth == FIELD_DEPTH {
                    if let Some(text) = title.as_mut() {
                        text.push_str(std::str::from_utf8(&e)?);
                    }
                }
            }
            Event::End(_) => {
                if depth == FIELD_DEPTH {
                    if let (Some(entry), Some(text)) = (current.as_mut(), title.take()) {
                        entry.title = text;
                    }
                } else if depth == ENTRY_DEPTH {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                }
                depth = depth.saturating_sub(1);
                // Only the first root element is the feed.
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Ok(()),
            _ => {}
        }
        buf.clear();
    }
}

fn is_named(e: &BytesStart<'_>, name: &[u8]) -> bool {
    e.local_name().as_ref() == name
}

/// `link@href` and `thumbnail@url`; a repeated element without the
/// attribute keeps the earlier value.
fn read_attributes(entry: &mut FeedEntry, e: &BytesStart<'_>) -> quick_xml::Result<()> {
    let (target, wanted): (&mut String, &[u8]) = match e.local_name().as_ref() {
        b"link" => (&mut entry.link.href, &b"href"[..]),
        b"thumbnail" => (&mut entry.thumbnail.url, &b"url"[..]),
        _ => return Ok(()),
    };

    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == wanted {
            *target = attr.unescape_value()?.into_owned();
        }
    }
    Ok(())
}
