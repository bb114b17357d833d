//! WASM bindings for catalog search.

use crate::{filter, paginate, rank, CatalogError, Item, Product};
use wasm_bindgen::prelude::*;

/// Calculate relevance score for a query against a single item.
///
/// The query is normalized (trimmed, lower-cased) before scoring.
#[wasm_bindgen]
pub fn relevance_score(query: &str, name: &str, category: &str, description: &str) -> u32 {
    let item = Item::new("", name)
        .with_category(category)
        .with_description(description);
    crate::calculate_relevance(&item, &crate::normalize_query(query))
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Search a catalog and return one page as JSON.
///
/// # Arguments
/// * `products_json` - JSON array of product records
/// * `category` - Exact category filter (empty for none)
/// * `query` - Free-text query (empty for catalog order)
/// * `page_number` - Requested 1-based page
/// * `page_size` - Items per page
///
/// # Returns
/// JSON page with `items`, `page_number`, `page_size`, `total_pages` and
/// `total_items`
///
/// # Errors
/// Throws if `products_json` is not a JSON array of product records.
#[wasm_bindgen]
pub fn search_catalog(
    products_json: &str,
    category: &str,
    query: &str,
    page_number: i32,
    page_size: u32,
) -> Result<String, JsError> {
    search_page_json(products_json, category, query, page_number, page_size)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn search_page_json(
    products_json: &str,
    category: &str,
    query: &str,
    page_number: i32,
    page_size: u32,
) -> Result<String, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(products_json)?;
    let items: Vec<Item> = products.into_iter().map(Item::from).collect();

    let category = Some(category).filter(|c| !c.is_empty());
    let ranked = rank(filter(items, category), query);
    let page = paginate(ranked, i64::from(page_number), page_size as usize);

    Ok(serde_json::to_string(&page)?)
}
