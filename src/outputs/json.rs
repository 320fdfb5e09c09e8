//! JSON-lines rendering of reported items.
//!
//! With `--json`, each reported item is serialized as a single-line JSON
//! object so the stream can be piped into `jq` or collected into a log.
//! Absent optional fields are skipped by the model's serialization rules,
//! never emitted as nulls.

use crate::models::NewsItem;

/// Serialize an item as one JSON line.
pub fn render(item: &NewsItem) -> serde_json::Result<String> {
    serde_json::to_string(item)
}
