//! Relevance scoring for catalog items.
//!
//! An item's score is the sum of independent contributions:
//!
//! | Condition                                         | Points |
//! |---------------------------------------------------|--------|
//! | trimmed name equals the query                     | 100    |
//! | otherwise, name contains the query                | 50     |
//! | category contains the query                       | 30     |
//! | description contains the query                    | 10     |
//! | each (query token, name/category token) pair within 2 edits | 15 |
//!
//! Token pairs are not deduplicated: one item word close to several query
//! words earns the bonus once per query word.

use crate::catalog::Item;
use crate::fuzzy::within_distance;

/// Points awarded per matching condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceScore {
    /// No match
    None = 0,
    /// Description contains the query
    Description = 10,
    /// A query token is within [`MAX_TOKEN_DISTANCE`] of an item token
    FuzzyToken = 15,
    /// Category contains the query
    Category = 30,
    /// Name contains the query
    NameContains = 50,
    /// Trimmed name equals the query
    ExactName = 100,
}

impl RelevanceScore {
    #[inline]
    pub fn points(self) -> u32 {
        self as u32
    }
}

/// Largest edit distance at which two tokens still count as a match.
pub const MAX_TOKEN_DISTANCE: usize = 2;

/// Trim and lower-case a raw query.
///
/// Lower-casing uses Unicode default case mapping, so results do not depend
/// on the host locale.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Score one item against an already normalized query.
///
/// # Arguments
/// * `item` - The catalog item
/// * `query` - Query as returned by [`normalize_query`]
///
/// # Returns
/// Relevance score (higher is better, 0 means no match)
///
/// # Example
/// ```
/// use isis_search::{calculate_relevance, Item};
///
/// let item = Item::new("1", "Blue Jacket");
/// assert_eq!(calculate_relevance(&item, "jaket"), 15);
/// ```
pub fn calculate_relevance(item: &Item, query: &str) -> u32 {
    let name = item.name().to_lowercase();
    let category = item.category().to_lowercase();
    let description = item.description().to_lowercase();

    let mut score = 0;

    if name.trim() == query {
        score += RelevanceScore::ExactName.points();
    } else if name.contains(query) {
        score += RelevanceScore::NameContains.points();
    }

    if category.contains(query) {
        score += RelevanceScore::Category.points();
    }

    if description.contains(query) {
        score += RelevanceScore::Description.points();
    }

    score + fuzzy_token_bonus(query, &name, &category)
}

fn fuzzy_token_bonus(query: &str, name: &str, category: &str) -> u32 {
    let item_tokens: Vec<&str> = name
        .split_whitespace()
        .chain(category.split_whitespace())
        .collect();

    let matches = query
        .split_whitespace()
        .flat_map(|q| item_tokens.iter().map(move |t| (q, *t)))
        .filter(|(q, t)| within_distance(q, t, MAX_TOKEN_DISTANCE))
        .count();

    // Item token counts are tiny; saturate rather than wrap on pathological input.
    u32::try_from(matches)
        .unwrap_or(u32::MAX)
        .saturating_mul(RelevanceScore::FuzzyToken.points())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str, description: &str) -> Item {
        Item::new("1", name)
            .with_category(category)
            .with_description(description)
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Red SHOES \t"), "red shoes");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_no_match_scores_zero() {
        let jacket = item("Blue Jacket", "Outerwear", "Warm coat");
        assert_eq!(calculate_relevance(&jacket, "shoes"), RelevanceScore::None.points());
    }

    #[test]
    fn test_exact_match() {
        // 100 exact + "red"/"red" and "shoes"/"shoes" token pairs
        let shoes = item("Red Shoes", "", "");
        assert_eq!(calculate_relevance(&shoes, "red shoes"), 130);
    }

    #[test]
    fn test_exact_match_ignores_surrounding_whitespace() {
        let shoes = item("  Red Shoes ", "", "");
        assert!(calculate_relevance(&shoes, "red shoes") >= 100);
    }

    #[test]
    fn test_non_contiguous_name_uses_token_bonus_only() {
        let shoes = item("Red Running Shoes", "", "");
        assert_eq!(calculate_relevance(&shoes, "red shoes"), 30);
    }

    #[test]
    fn test_typo_tolerance() {
        let jacket = item("Blue Jacket", "", "");
        assert_eq!(calculate_relevance(&jacket, "jaket"), 15);
    }

    #[test]
    fn test_name_contains() {
        let coat = item("Raincoat Deluxe", "", "");
        assert_eq!(calculate_relevance(&coat, "coat"), 50);
    }

    #[test]
    fn test_category_and_description_are_independent() {
        // 30 category + 10 description + "outerwear"/"outerwear" token pair
        let parka = item("Parka", "Outerwear", "Best outerwear for winter");
        assert_eq!(calculate_relevance(&parka, "outerwear"), 55);
    }

    #[test]
    fn test_description_only() {
        let parka = item("Parka", "", "Insulated and waterproof");
        assert_eq!(calculate_relevance(&parka, "waterproof"), 10);
    }

    #[test]
    fn test_fuzzy_bonus_not_deduplicated() {
        // "cap" and "cop" both sit within two edits of "cap"
        let cap = item("Cap", "", "");
        let one = calculate_relevance(&cap, "cap");
        let two = calculate_relevance(&cap, "cap cop");
        assert_eq!(one, 100 + 15);
        assert_eq!(two, 2 * 15);
    }

    #[test]
    fn test_empty_fields_never_panic() {
        let blank = item("", "", "");
        assert_eq!(calculate_relevance(&blank, "anything"), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let boots = item("LEATHER BOOTS", "SHOES", "");
        assert_eq!(calculate_relevance(&boots, "boots"), 50 + 15);
    }
}
