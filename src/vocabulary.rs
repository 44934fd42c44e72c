//! Catalog-wide filter vocabulary: distinct categories and popular tags.

use crate::tokenizer::TagExtractor;
use crate::types::CatalogRecord;
use std::collections::HashMap;

/// Number of popular tags offered as quick filters.
pub const VOCABULARY_SIZE: usize = 20;

/// The filter controls derived from a catalog snapshot.
///
/// Rebuilt whenever the catalog changes; never persisted. Both sequences are
/// deterministic for a given catalog: categories keep first-seen order, tags
/// are ranked by catalog-wide frequency with first-seen tie order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
  /// Distinct category values, deduplicated in first-seen order.
  pub categories: Vec<String>,
  /// The most frequent tags across the catalog, at most [`VOCABULARY_SIZE`].
  pub top_tags: Vec<String>,
}

impl Vocabulary {
  /// Derives the vocabulary from a catalog snapshot.
  ///
  /// Name and description contribute to a tag's frequency independently, so
  /// a tag appearing in both fields of one record counts twice. Tags are
  /// sorted descending by count; ties keep the order in which the tag was
  /// first encountered (stable sort).
  pub fn build(records: &[CatalogRecord], extractor: &TagExtractor) -> Self {
    let mut categories: Vec<String> = Vec::new();
    for record in records {
      if !record.category.is_empty() && !categories.contains(&record.category) {
        categories.push(record.category.clone());
      }
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut top_tags: Vec<String> = Vec::new();
    for record in records {
      for text in [record.name.as_str(), record.description.as_str()] {
        for tag in extractor.extract_tags_ordered(text) {
          match counts.get_mut(&tag) {
            Some(count) => *count += 1,
            None => {
              counts.insert(tag.clone(), 1);
              top_tags.push(tag);
            }
          }
        }
      }
    }

    // top_tags starts in first-seen order; the stable sort preserves it
    // among equal counts.
    top_tags.sort_by(|a, b| counts[b].cmp(&counts[a]));
    top_tags.truncate(VOCABULARY_SIZE);

    Self {
      categories,
      top_tags,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(id: u64, name: &str, description: &str, category: &str) -> CatalogRecord {
    CatalogRecord::new(id, name, description, category)
  }

  #[test]
  fn empty_catalog_yields_empty_vocabulary() {
    let vocabulary = Vocabulary::build(&[], &TagExtractor::new());
    assert!(vocabulary.categories.is_empty());
    assert!(vocabulary.top_tags.is_empty());
  }

  #[test]
  fn categories_keep_first_seen_order() {
    let records = vec![
      record(1, "", "", "Toys"),
      record(2, "", "", "Decor"),
      record(3, "", "", "Toys"),
      record(4, "", "", "Tools"),
    ];
    let vocabulary = Vocabulary::build(&records, &TagExtractor::new());
    assert_eq!(vocabulary.categories, vec!["Toys", "Decor", "Tools"]);
  }

  #[test]
  fn frequent_tags_rank_first() {
    let mut records: Vec<CatalogRecord> = (1..=5)
      .map(|id| record(id, "Dragon figure", "", "Toys"))
      .collect();
    records.push(record(6, "Spiral vase", "", "Decor"));
    records.push(record(7, "Twisted vase", "", "Decor"));

    let vocabulary = Vocabulary::build(&records, &TagExtractor::new());
    let dragon = vocabulary.top_tags.iter().position(|t| t == "dragon");
    let vase = vocabulary.top_tags.iter().position(|t| t == "vase");
    assert!(dragon.unwrap() < vase.unwrap());
  }

  #[test]
  fn tag_in_both_fields_counts_twice() {
    let records = vec![record(1, "Dragon", "A dragon with hinged joints", "Toys")];
    let vocabulary = Vocabulary::build(&records, &TagExtractor::new());
    // "dragon" counts once per field; "hinged" and "joints" once in total.
    assert_eq!(vocabulary.top_tags.first().map(String::as_str), Some("dragon"));
  }

  #[test]
  fn vocabulary_is_capped() {
    let records: Vec<CatalogRecord> = (0..40)
      .map(|i| record(i, &format!("gadget{i:02} widget{i:02}"), "", "Misc"))
      .collect();
    let vocabulary = Vocabulary::build(&records, &TagExtractor::new());
    assert_eq!(vocabulary.top_tags.len(), VOCABULARY_SIZE);
  }

  #[test]
  fn ties_keep_first_seen_order() {
    let records = vec![
      record(1, "Spiral vase", "", ""),
      record(2, "Dragon lamp", "", ""),
    ];
    let vocabulary = Vocabulary::build(&records, &TagExtractor::new());
    assert_eq!(vocabulary.top_tags, vec!["spiral", "vase", "dragon", "lamp"]);
  }
}
