//! Predicate composition over the catalog.
//!
//! A record survives filtering iff it passes three independent predicates
//! combined by logical AND: category equality, selected-tag coverage, and
//! fuzzy text match. An unset facet passes every record, so a completely
//! open selection returns the full catalog.

use crate::index::FuzzyIndex;
use crate::tokenizer::TagExtractor;
use crate::types::{CatalogRecord, Selection};

/// Applies the current selection to a catalog snapshot.
///
/// Filtering is deterministic and pure given its inputs and the index built
/// for the same snapshot. Output keeps the relative order of the input
/// catalog; there is no re-ranking by relevance.
#[derive(Debug, Clone)]
pub struct FilterEngine {
  extractor: TagExtractor,
}

impl FilterEngine {
  /// Creates an engine with the default tag extractor.
  pub fn new() -> Self {
    Self::with_extractor(TagExtractor::new())
  }

  /// Creates an engine with a custom tag extractor.
  pub fn with_extractor(extractor: TagExtractor) -> Self {
    Self { extractor }
  }

  /// The tag extractor this engine derives record tags with.
  pub fn extractor(&self) -> &TagExtractor {
    &self.extractor
  }

  /// Returns the records satisfying every active facet of `selection`.
  ///
  /// The text predicate consults `index` only when the search text is
  /// non-empty; an empty search never goes through the fuzzy matcher. An
  /// empty catalog yields an empty result.
  pub fn filter(
    &self,
    records: &[CatalogRecord],
    index: &FuzzyIndex,
    selection: &Selection,
  ) -> Vec<CatalogRecord> {
    let text_matches = if selection.search_text.is_empty() {
      None
    } else {
      Some(index.search(&selection.search_text))
    };

    records
      .iter()
      .filter(|record| {
        self.category_matches(record, selection)
          && self.tags_match(record, selection)
          && text_matches
            .as_ref()
            .map_or(true, |ids| ids.contains(&record.id))
      })
      .cloned()
      .collect()
  }

  fn category_matches(&self, record: &CatalogRecord, selection: &Selection) -> bool {
    match &selection.category {
      None => true,
      Some(category) => record.category == *category,
    }
  }

  /// Every selected tag must appear in the record's derived tag set. Tags
  /// are re-derived from name and description at filter time, keeping the
  /// predicate a pure function of the record text.
  fn tags_match(&self, record: &CatalogRecord, selection: &Selection) -> bool {
    if selection.tags.is_empty() {
      return true;
    }

    let mut record_tags = self.extractor.extract_tags(&record.name);
    record_tags.extend(self.extractor.extract_tags(&record.description));
    selection.tags.iter().all(|tag| record_tags.contains(tag))
  }
}

impl Default for FilterEngine {
  fn default() -> Self {
    Self::new()
  }
}
