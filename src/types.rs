//! Core data types for the Modelsift engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Type alias for catalog record identifiers.
///
/// Using a dedicated type alias makes it easier to change the underlying type
/// of the identifier in the future if needed. It also improves readability.
pub type RecordId = u64;

/// An immutable, externally supplied catalog entry.
///
/// Records are created once when the catalog loads and never mutated
/// afterwards. Missing fields in the source document deserialize as empty
/// text so a malformed record degrades instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
  /// Unique identifier, parsed from the source document's entry key.
  pub id: RecordId,
  /// Display name of the record.
  #[serde(default)]
  pub name: String,
  /// Free-text description.
  #[serde(default)]
  pub description: String,
  /// Category value, one of an open set.
  #[serde(default)]
  pub category: String,
  /// Reference to a preview image.
  #[serde(default)]
  pub image_url: String,
  /// Reference to the downloadable asset.
  #[serde(default)]
  pub download_url: String,
}

impl CatalogRecord {
  /// Creates a record with the fields that drive search and filtering.
  ///
  /// Image and download references start out empty; set them directly when
  /// they matter.
  pub fn new(
    id: RecordId,
    name: impl Into<String>,
    description: impl Into<String>,
    category: impl Into<String>,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      description: description.into(),
      category: category.into(),
      image_url: String::new(),
      download_url: String::new(),
    }
  }
}

/// The current UI selection, owned and mutated only by the
/// [`CatalogController`](crate::controller::CatalogController).
///
/// The default selection is completely open: empty search text, no category,
/// no tags. A record passes an unset facet unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
  /// Free-text search input. Empty means the text facet is bypassed.
  pub search_text: String,
  /// Single selected category, or `None` for "any".
  pub category: Option<String>,
  /// Selected keyword tags. A record must carry every one of them.
  pub tags: HashSet<String>,
}

impl Selection {
  /// Flips a tag in or out of the selected set.
  ///
  /// Toggling is its own inverse: toggling the same tag twice restores the
  /// set to its prior value. The tag need not appear in the current
  /// vocabulary; it is applied literally to each record's derived tag set.
  pub fn toggle_tag(&mut self, tag: impl Into<String>) {
    let tag = tag.into();
    if !self.tags.remove(&tag) {
      self.tags.insert(tag);
    }
  }

  /// True when no facet is active, so filtering returns the full catalog.
  pub fn is_empty(&self) -> bool {
    self.search_text.is_empty() && self.category.is_none() && self.tags.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toggle_tag_is_its_own_inverse() {
    let mut selection = Selection::default();
    selection.toggle_tag("dragon");
    assert!(selection.tags.contains("dragon"));
    selection.toggle_tag("dragon");
    assert!(selection.tags.is_empty());
  }

  #[test]
  fn default_selection_is_empty() {
    let selection = Selection::default();
    assert!(selection.is_empty());
  }

  #[test]
  fn record_with_missing_fields_deserializes_to_empty_text() {
    let record: CatalogRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
    assert_eq!(record.id, 7);
    assert!(record.name.is_empty());
    assert!(record.description.is_empty());
    assert!(record.category.is_empty());
  }
}
