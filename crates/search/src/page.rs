//! Paginated search results.

use serde::Serialize;

/// One page of ranked results.
///
/// Built only by [`paginate`](crate::paginate), which guarantees:
/// - `total_pages == ceil(total_items / page_size)`, 0 for an empty result
/// - `1 <= page_number <= max(total_pages, 1)`
/// - `items.len() <= page_size`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    page_number: usize,
    page_size: usize,
    total_pages: usize,
    total_items: usize,
}

impl<T> Page<T> {
    pub(crate) fn new(
        items: Vec<T>,
        page_number: usize,
        page_size: usize,
        total_pages: usize,
        total_items: usize,
    ) -> Self {
        debug_assert!(items.len() <= page_size);
        debug_assert!(page_number >= 1 && page_number <= total_pages.max(1));
        Self {
            items,
            page_number,
            page_size,
            total_pages,
            total_items,
        }
    }

    /// Items on this page, in rank order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 1-based page number after clamping
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of items across all pages
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}
