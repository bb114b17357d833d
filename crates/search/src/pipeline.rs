//! Filter, rank and paginate a materialized catalog.
//!
//! Each request runs [`filter`], [`rank`] and [`paginate`] once, in that
//! order. Nothing is cached between requests.

use crate::catalog::{CatalogSource, Item};
use crate::page::Page;
use crate::relevance::{calculate_relevance, normalize_query};
use serde::{Deserialize, Serialize};

/// Page size used when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Item paired with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    /// The matched item
    pub item: Item,
    /// Relevance score (higher is better)
    pub score: u32,
}

/// Keep only items in `category`.
///
/// The comparison is exact and case-sensitive. An absent or empty category
/// passes the catalog through unchanged.
pub fn filter(catalog: Vec<Item>, category: Option<&str>) -> Vec<Item> {
    match category {
        Some(category) if !category.is_empty() => catalog
            .into_iter()
            .filter(|item| item.category() == category)
            .collect(),
        _ => catalog,
    }
}

/// Order items by relevance to `raw_query`, dropping those that do not match.
///
/// A blank query returns `items` as given without scoring anything. Items
/// with equal scores keep their input order.
///
/// # Example
/// ```
/// use isis_search::{rank, Item};
///
/// let items = vec![
///     Item::new("1", "Blue Jacket").with_category("Outerwear"),
///     Item::new("2", "Red Shoes").with_category("Footwear"),
/// ];
///
/// let ranked = rank(items, "shoes");
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].id(), "2");
/// ```
pub fn rank(items: Vec<Item>, raw_query: &str) -> Vec<Item> {
    if raw_query.trim().is_empty() {
        return items;
    }

    let query = normalize_query(raw_query);
    let candidates = items.len();

    let mut scored: Vec<ScoredItem> = score_all(items, &query)
        .into_iter()
        .filter(|scored| scored.score > 0)
        .collect();

    // `sort_by` is stable; ties keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query = %query,
        candidates,
        matched = scored.len(),
        "Ranked catalog items"
    );

    scored.into_iter().map(|scored| scored.item).collect()
}

/// Score every item, preserving input order.
fn score_all(items: Vec<Item>, query: &str) -> Vec<ScoredItem> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .into_par_iter()
            .map(|item| {
                let score = calculate_relevance(&item, query);
                ScoredItem { item, score }
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .into_iter()
            .map(|item| {
                let score = calculate_relevance(&item, query);
                ScoredItem { item, score }
            })
            .collect()
    }
}

/// Cut one page out of `items`.
///
/// Out-of-range input is clamped rather than rejected: a page number below 1
/// becomes 1, a page past the end becomes the last page, and a page size
/// of 0 is treated as 1.
///
/// # Example
/// ```
/// use isis_search::paginate;
///
/// let page = paginate((0..25).collect::<Vec<_>>(), 3, 12);
/// assert_eq!(page.total_pages(), 3);
/// assert_eq!(page.items(), &[24]);
/// ```
pub fn paginate<T>(items: Vec<T>, page_number: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let requested = page_number;
    let page_number = usize::try_from(requested).unwrap_or(0).max(1);
    let page_number = if total_pages > 0 {
        page_number.min(total_pages)
    } else {
        1
    };

    if i64::try_from(page_number).ok() != Some(requested) {
        tracing::debug!(requested, clamped = page_number, total_pages, "Page number clamped");
    }

    let start = ((page_number - 1) * page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    let page_items: Vec<T> = items.into_iter().skip(start).take(end - start).collect();

    Page::new(page_items, page_number, page_size, total_pages, total_items)
}

/// Parameters of one catalog search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Exact category to restrict results to
    pub category: Option<String>,
    /// Free-text query
    pub search_term: Option<String>,
    /// Requested 1-based page, clamped into range
    #[serde(default = "default_page_number")]
    pub page_number: i64,
}

fn default_page_number() -> i64 {
    1
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            category: None,
            search_term: None,
            page_number: default_page_number(),
        }
    }
}

impl SearchRequest {
    /// First page of the whole catalog, no query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the free-text query
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Set the requested page
    #[must_use]
    pub fn with_page(mut self, page_number: i64) -> Self {
        self.page_number = page_number;
        self
    }
}

/// Runs searches against a [`CatalogSource`].
#[derive(Debug, Clone)]
pub struct SearchService<S> {
    source: S,
    page_size: usize,
}

impl<S: CatalogSource> SearchService<S> {
    /// Create a service with [`DEFAULT_PAGE_SIZE`].
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Create a service with a custom page size (0 is treated as 1).
    pub fn with_page_size(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the catalog, then filter, rank and paginate it.
    ///
    /// # Errors
    /// Returns the catalog source's error unchanged if the fetch fails. No
    /// retry is attempted.
    pub fn search(&self, request: &SearchRequest) -> Result<Page<Item>, S::Error> {
        let category = request.category.as_deref().filter(|c| !c.is_empty());
        let catalog = self.source.fetch_catalog(category)?;

        let filtered = filter(catalog, category);
        let ranked = rank(filtered, request.search_term.as_deref().unwrap_or_default());
        let page = paginate(ranked, request.page_number, self.page_size);

        tracing::debug!(
            category = category.unwrap_or_default(),
            total_items = page.total_items(),
            page = page.page_number(),
            total_pages = page.total_pages(),
            "Search completed"
        );

        Ok(page)
    }

    /// Look up a single item by ID.
    ///
    /// # Errors
    /// Returns the catalog source's error unchanged if the fetch fails.
    pub fn details(&self, id: &str) -> Result<Option<Item>, S::Error> {
        Ok(self
            .source
            .fetch_catalog(None)?
            .into_iter()
            .find(|item| item.id() == id))
    }
}
