//! Catalog search and relevance ranking for the Isis storefront.
//!
//! This crate provides:
//! - Levenshtein edit distance
//! - Additive relevance scoring with typo-tolerant token matching
//! - A filter, rank and paginate pipeline over a materialized catalog
//! - Catalog sources backed by memory or a JSON file
//!
//! # Example
//!
//! ```
//! use isis_search::{InMemoryCatalog, Item, SearchRequest, SearchService};
//!
//! let catalog = InMemoryCatalog::new(vec![
//!     Item::new("1", "Blue Jacket").with_category("Outerwear"),
//!     Item::new("2", "Red Shoes").with_category("Footwear"),
//! ]);
//!
//! let service = SearchService::new(catalog);
//! let page = service.search(&SearchRequest::new().with_search_term("jaket")).unwrap();
//!
//! assert_eq!(page.total_items(), 1);
//! assert_eq!(page.items()[0].name(), "Blue Jacket");
//! ```

mod catalog;
mod error;
mod fuzzy;
mod page;
mod pipeline;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{CatalogSource, InMemoryCatalog, Item, JsonFileCatalog, Product, PLACEHOLDER_IMAGE};
pub use error::{CatalogError, CatalogErrorCode, Result};
pub use fuzzy::{levenshtein_distance, within_distance};
pub use page::Page;
pub use pipeline::{filter, paginate, rank, ScoredItem, SearchRequest, SearchService, DEFAULT_PAGE_SIZE};
pub use relevance::{calculate_relevance, normalize_query, RelevanceScore, MAX_TOKEN_DISTANCE};
