//! Loading the catalog from its external JSON source.
//!
//! The source document is a single JSON object mapping record ids (as
//! strings) to record fields. The source is consumed once at startup; a
//! document that cannot be read or parsed degrades to an empty catalog with
//! the failure logged, and a malformed entry degrades to empty fields. No
//! failure here is fatal to the hosting process.

use crate::types::{CatalogRecord, RecordId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Record fields as they appear in the source document. The id lives in the
/// entry key, not the value.
#[derive(Debug, Deserialize)]
struct RawRecord {
  #[serde(rename = "model_name", default)]
  name: String,
  #[serde(default)]
  description: String,
  #[serde(default)]
  category: String,
  #[serde(rename = "first_image_url", default)]
  image_url: String,
  #[serde(rename = "download_link", default)]
  download_url: String,
}

/// Parses a catalog document into typed records, sorted by id.
///
/// Entries whose key does not parse as an integer id are skipped with a
/// warning. An unparseable document yields the empty catalog.
pub fn parse_catalog(data: &str) -> Vec<CatalogRecord> {
  let raw: HashMap<String, RawRecord> = match serde_json::from_str(data) {
    Ok(raw) => raw,
    Err(err) => {
      log::error!("failed to parse catalog document: {}", err);
      return Vec::new();
    }
  };

  let mut records: Vec<CatalogRecord> = raw
    .into_iter()
    .filter_map(|(key, fields)| match key.parse::<RecordId>() {
      Ok(id) => Some(CatalogRecord {
        id,
        name: fields.name,
        description: fields.description,
        category: fields.category,
        image_url: fields.image_url,
        download_url: fields.download_url,
      }),
      Err(_) => {
        log::warn!("skipping catalog entry with non-numeric id {:?}", key);
        None
      }
    })
    .collect();

  // JSON object iteration order is unspecified; sort for a stable catalog.
  records.sort_by_key(|record| record.id);
  records
}

/// Reads and parses a catalog file.
///
/// An unreadable file is logged and yields the empty catalog, on which the
/// vocabulary builder and the index still operate correctly.
pub fn load_catalog(path: impl AsRef<Path>) -> Vec<CatalogRecord> {
  let path = path.as_ref();
  match std::fs::read_to_string(path) {
    Ok(data) => parse_catalog(&data),
    Err(err) => {
      log::error!("failed to read catalog {}: {}", path.display(), err);
      Vec::new()
    }
  }
}
