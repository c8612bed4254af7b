use std::path::PathBuf;
use std::time::Duration;

use gallery_model::{Item, ModelError, ensure_unique_ids};

use crate::{HttpSource, IngestError, JsonFileSource, Result};

/// Something that can deliver the full, ordered item list.
pub trait ItemSource {
    /// Human-readable location, for logs and error messages.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Vec<Item>>;
}

/// Parse a JSON array of items, rejecting duplicate ids.
pub fn decode_items(payload: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(payload)?;
    ensure_unique_ids(&items).map_err(|err| match err {
        ModelError::DuplicateItemId(id) => IngestError::DuplicateId(id),
        other => IngestError::Decode(other.to_string()),
    })?;
    Ok(items)
}

/// Pick a source from a location string: `http(s)://` URLs are fetched,
/// anything else is read as a local JSON file.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn ItemSource>> {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Box::new(HttpSource::with_timeout(location, timeout)?))
    } else {
        Ok(Box::new(JsonFileSource::new(PathBuf::from(location))))
    }
}
