//! Modelsift - an in-memory search and faceted filtering engine for
//! browsable catalogs.
//!
//! Modelsift holds a catalog of records in memory and narrows it live by
//! combining three independent facets: free-text fuzzy search, a single
//! category selection, and a set of toggleable keyword tags derived from the
//! records themselves. The [`controller::CatalogController`] owns the
//! selection state and recomputes the filtered result through a trailing-edge
//! debounce, so bursts of rapid input collapse into a single recomputation.

pub mod catalog;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod index;
pub mod tokenizer;
pub mod types;
pub mod vocabulary;

pub mod prelude {
  //! Convenient re-exports for common types.

  pub use crate::catalog::{load_catalog, parse_catalog};
  pub use crate::controller::{CatalogController, CatalogControllerBuilder};
  pub use crate::debounce::{Debouncer, DEBOUNCE_WINDOW};
  pub use crate::filter::FilterEngine;
  pub use crate::index::{FuzzyIndex, DEFAULT_MAX_DISTANCE};
  pub use crate::tokenizer::{TagExtractor, DEFAULT_STOPWORDS};
  pub use crate::types::{CatalogRecord, RecordId, Selection};
  pub use crate::vocabulary::{Vocabulary, VOCABULARY_SIZE};
}
