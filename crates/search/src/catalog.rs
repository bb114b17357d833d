//! Catalog items and the sources that supply them.
//!
//! A [`CatalogSource`] hands the search pipeline a fully materialized list of
//! items. Raw [`Product`] records coming from storage have nullable text
//! fields; converting them into [`Item`]s replaces every missing string with
//! an empty one, so scoring never has to deal with absent values.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::path::{Path, PathBuf};

/// Web path served when an item has no cover image.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Product record as stored by the catalog backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID (numeric or string in the source data)
    #[serde(default, alias = "productID", alias = "productId", deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Long description
    #[serde(default)]
    pub description: Option<String>,
    /// Category label, matched exactly by the category filter
    #[serde(default)]
    pub category: Option<String>,
    /// List price
    #[serde(default)]
    pub price: Option<f64>,
    /// Sale price, if discounted
    #[serde(default)]
    pub discount_price: Option<f64>,
    /// Stored cover image path
    #[serde(default, alias = "coverImageURL")]
    pub cover_image_url: Option<String>,
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Int(n) => n.to_string(),
        RawId::Text(s) => s,
    }))
}

/// Read-only catalog item as seen by the search pipeline.
///
/// Text fields are never absent; a missing value is the empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: String,
    name: String,
    description: String,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_image_url: Option<String>,
}

impl Item {
    /// Creates an item with an empty description and category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            price: None,
            discount_price: None,
            cover_image_url: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set list and discount prices
    #[must_use]
    pub fn with_price(mut self, price: f64, discount_price: Option<f64>) -> Self {
        self.price = Some(price);
        self.discount_price = discount_price;
        self
    }

    /// Set the stored cover image path
    #[must_use]
    pub fn with_cover_image(mut self, path: impl Into<String>) -> Self {
        self.cover_image_url = Some(path.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn discount_price(&self) -> Option<f64> {
        self.discount_price
    }

    /// Price the customer pays: the discount price when set, else the list price.
    pub fn effective_price(&self) -> Option<f64> {
        self.discount_price.or(self.price)
    }

    /// True when a discount price is set.
    pub fn is_discounted(&self) -> bool {
        self.discount_price.is_some()
    }

    /// Web path for the cover image.
    ///
    /// Paths that already start with `/` are served as is. Filesystem paths
    /// are cut down to the part starting at the first `images` segment.
    ///
    /// # Example
    /// ```
    /// use isis_search::Item;
    ///
    /// let item = Item::new("1", "Scarf").with_cover_image(r"C:\site\wwwroot\images\scarf.jpg");
    /// assert_eq!(item.web_image(), "/images/scarf.jpg");
    /// assert_eq!(Item::new("2", "Hat").web_image(), "/images/placeholder.jpg");
    /// ```
    pub fn web_image(&self) -> String {
        let path = match self.cover_image_url.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return PLACEHOLDER_IMAGE.to_string(),
        };

        if path.starts_with('/') {
            return path.to_string();
        }

        match path.find("images") {
            Some(index) => format!("/{}", path[index..].replace('\\', "/")),
            None => path.to_string(),
        }
    }
}

impl From<Product> for Item {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.unwrap_or_default(),
            name: product.name.unwrap_or_default(),
            description: product.description.unwrap_or_default(),
            category: product.category.unwrap_or_default(),
            price: product.price,
            discount_price: product.discount_price,
            cover_image_url: product.cover_image_url,
        }
    }
}

/// Supplier of the full candidate set for a search.
///
/// Implementations return every item matching `category` (or the whole
/// catalog when it is `None`), in a stable order and without pagination.
/// Errors are passed back to the caller of the search untouched.
pub trait CatalogSource {
    /// Failure raised when the catalog cannot be fetched
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch all items, optionally restricted to one category.
    fn fetch_catalog(&self, category: Option<&str>) -> std::result::Result<Vec<Item>, Self::Error>;
}

fn matches_category(item: &Item, category: Option<&str>) -> bool {
    match category {
        Some(c) if !c.is_empty() => item.category == c,
        _ => true,
    }
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<Item>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build from raw product records.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self::new(products.into_iter().map(Item::from).collect())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    type Error = Infallible;

    fn fetch_catalog(&self, category: Option<&str>) -> std::result::Result<Vec<Item>, Infallible> {
        Ok(self
            .items
            .iter()
            .filter(|item| matches_category(item, category))
            .cloned()
            .collect())
    }
}

/// Catalog read from a JSON array of products on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    type Error = CatalogError;

    fn fetch_catalog(&self, category: Option<&str>) -> Result<Vec<Item>> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let products: Vec<Product> = serde_json::from_str(&content)?;

        tracing::debug!(
            path = %self.path.display(),
            products = products.len(),
            "Catalog file loaded"
        );

        Ok(products
            .into_iter()
            .map(Item::from)
            .filter(|item| matches_category(item, category))
            .collect())
    }
}
