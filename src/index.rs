//! Fuzzy full-text index over catalog name and description fields.

use crate::tokenizer::tokenize;
use crate::types::{CatalogRecord, RecordId};
use std::collections::HashSet;
use strsim::normalized_levenshtein;

/// Default fraction of characters allowed to differ between a query term and
/// an indexed term. Permissive on purpose: typos and near-misses still match.
pub const DEFAULT_MAX_DISTANCE: f64 = 0.4;

/// Per-record index entry: the tokenized, deduplicated terms of each field.
#[derive(Debug, Clone)]
struct IndexEntry {
  id: RecordId,
  name_terms: Vec<String>,
  description_terms: Vec<String>,
}

/// An approximate-string-matching index over a catalog snapshot.
///
/// The index is built once per catalog load and queried read-only; it is not
/// incrementally updatable. [`search`](Self::search) reports membership only:
/// downstream filtering never consults match scores or ordering.
///
/// Matching uses normalized Levenshtein distance, so the configured cutoff
/// directly expresses the fraction of characters that may differ. A record
/// matches when any query term is within the cutoff of any indexed term, in
/// either field. This guarantees self-matching: a record's exact name as the
/// query always includes that record.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
  entries: Vec<IndexEntry>,
  max_distance: f64,
}

impl FuzzyIndex {
  /// Builds an index over `records` with [`DEFAULT_MAX_DISTANCE`].
  pub fn build(records: &[CatalogRecord]) -> Self {
    Self::with_max_distance(records, DEFAULT_MAX_DISTANCE)
  }

  /// Builds an index with a custom distance cutoff in `[0.0, 1.0]`.
  ///
  /// `0.0` demands exact term matches; `1.0` matches everything.
  pub fn with_max_distance(records: &[CatalogRecord], max_distance: f64) -> Self {
    let entries = records
      .iter()
      .map(|record| IndexEntry {
        id: record.id,
        name_terms: index_terms(&record.name),
        description_terms: index_terms(&record.description),
      })
      .collect();

    Self {
      entries,
      max_distance,
    }
  }

  /// Returns the ids of records whose name or description matches `query`.
  ///
  /// An empty or whitespace-only query yields the empty set; the empty-query
  /// bypass belongs to the filter engine, not the index.
  pub fn search(&self, query: &str) -> HashSet<RecordId> {
    let query_terms = tokenize(query);
    let mut ids = HashSet::new();
    if query_terms.is_empty() {
      return ids;
    }

    for entry in &self.entries {
      'entry: for query_term in &query_terms {
        for term in entry.name_terms.iter().chain(&entry.description_terms) {
          if self.terms_match(query_term, term) {
            ids.insert(entry.id);
            break 'entry;
          }
        }
      }
    }

    ids
  }

  /// Number of indexed records.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// True when no records are indexed.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn terms_match(&self, query_term: &str, term: &str) -> bool {
    let query_len = query_term.chars().count();
    let term_len = term.chars().count();
    let max_len = query_len.max(term_len);
    if max_len == 0 {
      return true;
    }

    // Length-based pruning: the normalized distance is at least the length
    // gap over the longer term, so a large gap can never come under the
    // cutoff.
    let len_diff = query_len.abs_diff(term_len);
    if len_diff as f64 > self.max_distance * max_len as f64 {
      return false;
    }

    1.0 - normalized_levenshtein(query_term, term) <= self.max_distance
  }
}

impl Default for FuzzyIndex {
  fn default() -> Self {
    Self::build(&[])
  }
}

/// Tokenizes a field into sorted, deduplicated lowercase terms.
fn index_terms(text: &str) -> Vec<String> {
  let mut terms = tokenize(text);
  terms.sort();
  terms.dedup();
  terms
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_catalog() -> Vec<CatalogRecord> {
    vec![
      CatalogRecord::new(1, "Articulated Dragon", "A flexible dragon figure", "Toys"),
      CatalogRecord::new(2, "Spiral Vase", "Vase printed in spiral mode", "Decor"),
      CatalogRecord::new(3, "Phone Stand", "Adjustable stand for phones", "Gadgets"),
    ]
  }

  #[test]
  fn exact_name_matches_its_own_record() {
    let records = sample_catalog();
    let index = FuzzyIndex::build(&records);
    for record in &records {
      let ids = index.search(&record.name);
      assert!(ids.contains(&record.id), "no self-match for {}", record.name);
    }
  }

  #[test]
  fn tolerates_typos_within_cutoff() {
    let index = FuzzyIndex::build(&sample_catalog());
    assert!(index.search("dragn").contains(&1));
    assert!(index.search("vaze").contains(&2));
  }

  #[test]
  fn rejects_unrelated_terms() {
    let index = FuzzyIndex::build(&sample_catalog());
    assert!(!index.search("submarine").contains(&1));
  }

  #[test]
  fn matches_description_terms() {
    let index = FuzzyIndex::build(&sample_catalog());
    assert!(index.search("adjustable").contains(&3));
  }

  #[test]
  fn empty_query_yields_empty_set() {
    let index = FuzzyIndex::build(&sample_catalog());
    assert!(index.search("").is_empty());
    assert!(index.search("   ").is_empty());
  }

  #[test]
  fn zero_cutoff_requires_exact_terms() {
    let records = sample_catalog();
    let index = FuzzyIndex::with_max_distance(&records, 0.0);
    assert!(index.search("dragon").contains(&1));
    assert!(index.search("dragn").is_empty());
  }

  #[test]
  fn empty_catalog_yields_empty_results() {
    let index = FuzzyIndex::default();
    assert!(index.is_empty());
    assert!(index.search("anything").is_empty());
  }
}
