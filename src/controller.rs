//! The reactive controller that owns selection state and the filtered result.

use crate::debounce::{Debouncer, DEBOUNCE_WINDOW};
use crate::filter::FilterEngine;
use crate::index::{FuzzyIndex, DEFAULT_MAX_DISTANCE};
use crate::tokenizer::TagExtractor;
use crate::types::{CatalogRecord, Selection};
use crate::vocabulary::Vocabulary;
use std::time::{Duration, Instant};

/// Owns the catalog snapshot, the derived vocabulary and index, the current
/// selection, and the published filtered result.
///
/// Every mutator updates the selection and schedules a recomputation through
/// a trailing-edge debounce; the host's event loop drives the controller by
/// polling [`tick`](Self::tick). Changes arriving while a recomputation is
/// pending reset the delay rather than stacking further runs, so a burst of
/// input produces exactly one recomputation reflecting the final state.
/// No recomputation survives the controller it was scheduled on: dropping
/// the controller or loading a new catalog cancels any pending run.
///
/// Create a `CatalogController` with [`new`](Self::new) or, for custom
/// stopwords, fuzzy cutoff, or debounce window, via
/// [`builder`](Self::builder).
///
/// # Examples
///
/// ```rust
/// use modelsift::prelude::*;
///
/// let mut controller = CatalogController::new();
/// controller.load_catalog(vec![
///   CatalogRecord::new(1, "Articulated Dragon", "A flexible dragon", "Toys"),
///   CatalogRecord::new(2, "Spiral Vase", "Vase in spiral mode", "Decor"),
/// ]);
///
/// controller.set_search_text("dragon");
/// controller.toggle_tag("flexible");
///
/// // The host loop polls; after 300ms of quiescence the result publishes.
/// std::thread::sleep(std::time::Duration::from_millis(310));
/// assert!(controller.tick());
/// assert_eq!(controller.results().len(), 1);
/// ```
pub struct CatalogController {
  catalog: Vec<CatalogRecord>,
  vocabulary: Vocabulary,
  index: FuzzyIndex,
  engine: FilterEngine,
  selection: Selection,
  debounce: Debouncer,
  filtered: Vec<CatalogRecord>,
  max_distance: f64,
}

impl CatalogController {
  /// Creates a controller with default configuration and an empty catalog.
  pub fn new() -> Self {
    Self::builder().build()
  }

  /// Creates a new `CatalogControllerBuilder` to configure a controller.
  pub fn builder() -> CatalogControllerBuilder {
    CatalogControllerBuilder::new()
  }

  /// Replaces the catalog snapshot, rebuilding the vocabulary and the index.
  ///
  /// Any recomputation pending against the previous catalog is cancelled and
  /// never publishes. The selection is kept as-is and a fresh recomputation
  /// is scheduled, so the published result catches up with the new snapshot
  /// after the debounce window.
  pub fn load_catalog(&mut self, records: Vec<CatalogRecord>) {
    self.debounce.cancel();
    self.vocabulary = Vocabulary::build(&records, self.engine.extractor());
    self.index = FuzzyIndex::with_max_distance(&records, self.max_distance);
    self.catalog = records;
    self.debounce.touch();
  }

  /// Updates the free-text search input and schedules a recomputation.
  pub fn set_search_text(&mut self, text: impl Into<String>) {
    self.selection.search_text = text.into();
    self.debounce.touch();
  }

  /// Updates the category facet (`None` means "any") and schedules a
  /// recomputation.
  pub fn set_category(&mut self, category: Option<String>) {
    self.selection.category = category;
    self.debounce.touch();
  }

  /// Toggles a tag in the selected set and schedules a recomputation.
  pub fn toggle_tag(&mut self, tag: impl Into<String>) {
    self.selection.toggle_tag(tag);
    self.debounce.touch();
  }

  /// Polls the debounce deadline against the current time.
  pub fn tick(&mut self) -> bool {
    self.tick_at(Instant::now())
  }

  /// Runs the pending recomputation if its deadline has passed at `now`.
  ///
  /// Returns whether a new filtered result was published. Recomputation is
  /// synchronous and assumed cheap relative to the debounce window.
  pub fn tick_at(&mut self, now: Instant) -> bool {
    if !self.debounce.fire_at(now) {
      return false;
    }
    self.filtered = self.engine.filter(&self.catalog, &self.index, &self.selection);
    true
  }

  /// The most recently published filtered result.
  pub fn results(&self) -> &[CatalogRecord] {
    &self.filtered
  }

  /// The full catalog snapshot.
  pub fn catalog(&self) -> &[CatalogRecord] {
    &self.catalog
  }

  /// Distinct category values for rendering the category control.
  pub fn categories(&self) -> &[String] {
    &self.vocabulary.categories
  }

  /// The popular-tag vocabulary for rendering quick-filter chips.
  pub fn top_tags(&self) -> &[String] {
    &self.vocabulary.top_tags
  }

  /// The current selection, for reflecting UI toggle states.
  pub fn selection(&self) -> &Selection {
    &self.selection
  }

  /// True while a recomputation is scheduled but has not yet run.
  pub fn has_pending(&self) -> bool {
    self.debounce.is_pending()
  }
}

impl Default for CatalogController {
  fn default() -> Self {
    Self::new()
  }
}

/// A builder for creating `CatalogController` instances.
///
/// The stopword list, fuzzy cutoff, and debounce window are fixed at
/// construction; they are configuration, not runtime state.
pub struct CatalogControllerBuilder {
  extractor: TagExtractor,
  max_distance: f64,
  window: Duration,
}

impl CatalogControllerBuilder {
  /// Creates a builder with the default configuration.
  pub fn new() -> Self {
    Self {
      extractor: TagExtractor::new(),
      max_distance: DEFAULT_MAX_DISTANCE,
      window: DEBOUNCE_WINDOW,
    }
  }

  /// Replaces the tag extractor used for the vocabulary and tag predicate.
  pub fn extractor(mut self, extractor: TagExtractor) -> Self {
    self.extractor = extractor;
    self
  }

  /// Replaces the default stopword list.
  pub fn stopwords<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.extractor = TagExtractor::with_stopwords(words);
    self
  }

  /// Sets the fuzzy-match distance cutoff in `[0.0, 1.0]`.
  pub fn max_distance(mut self, max_distance: f64) -> Self {
    self.max_distance = max_distance;
    self
  }

  /// Sets the debounce quiescence window.
  pub fn debounce_window(mut self, window: Duration) -> Self {
    self.window = window;
    self
  }

  /// Builds the controller with an empty catalog.
  pub fn build(self) -> CatalogController {
    CatalogController {
      catalog: Vec::new(),
      vocabulary: Vocabulary::default(),
      index: FuzzyIndex::with_max_distance(&[], self.max_distance),
      engine: FilterEngine::with_extractor(self.extractor),
      selection: Selection::default(),
      debounce: Debouncer::new(self.window),
      filtered: Vec::new(),
      max_distance: self.max_distance,
    }
  }
}

impl Default for CatalogControllerBuilder {
  fn default() -> Self {
    Self::new()
  }
}
