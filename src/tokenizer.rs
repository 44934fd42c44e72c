//! Text tokenization and keyword-tag extraction.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Words that never make useful filter tags: generic function words plus
/// noise common to model descriptions (print settings, boilerplate advice).
pub const DEFAULT_STOPWORDS: &[&str] = &[
  "the", "layers", "will", "like", "filament", "need", "round", "speed",
  "guide", "temperature", "created", "make", "support", "recommended",
  "without", "inside", "printing", "sure", "holes", "check", "your", "more",
  "layer", "printed", "have", "used", "flat", "surface", "a", "an", "print",
  "model", "of", "then", "there", "other", "base", "height", "some",
  "infill", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by",
  "is", "it", "as", "from", "that", "this", "are", "was", "were", "be",
  "has", "had", "not", "they", "he", "she", "www", "http", "https", "com",
  "net", "org",
];

/// Tokenize text into lowercase words.
pub fn tokenize(text: &str) -> Vec<String> {
  text
    .unicode_words()
    .map(|word| word.to_lowercase())
    .collect()
}

/// Extracts deduplicated keyword tags from free text.
///
/// A token survives iff it is longer than three characters, is not in the
/// stopword set, and does not parse entirely as a number. Extraction is a
/// pure function of the input text and the stopword set: identical text
/// always yields the identical tag set.
#[derive(Debug, Clone)]
pub struct TagExtractor {
  stopwords: HashSet<String>,
}

impl TagExtractor {
  /// Creates an extractor with [`DEFAULT_STOPWORDS`].
  pub fn new() -> Self {
    Self::with_stopwords(DEFAULT_STOPWORDS.iter().copied())
  }

  /// Creates an extractor with a custom stopword list.
  pub fn with_stopwords<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      stopwords: words.into_iter().map(Into::into).collect(),
    }
  }

  /// Extracts the tag set of `text`. Empty input yields an empty set.
  pub fn extract_tags(&self, text: &str) -> HashSet<String> {
    self.extract_tags_ordered(text).into_iter().collect()
  }

  /// Extracts tags deduplicated in first-appearance order.
  ///
  /// The vocabulary builder relies on this order for stable frequency
  /// tie-breaking; membership checks should prefer [`extract_tags`].
  ///
  /// [`extract_tags`]: Self::extract_tags
  pub fn extract_tags_ordered(&self, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for word in tokenize(text) {
      if self.keeps(&word) && seen.insert(word.clone()) {
        tags.push(word);
      }
    }
    tags
  }

  fn keeps(&self, word: &str) -> bool {
    word.chars().count() > 3
      && !self.stopwords.contains(word)
      && word.parse::<f64>().is_err()
  }
}

impl Default for TagExtractor {
  fn default() -> Self {
    Self::new()
  }
}
