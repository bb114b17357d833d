//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised by the bundled catalog sources.
///
/// The search pipeline itself never fails; these only come out of
/// [`CatalogSource::fetch_catalog`](crate::CatalogSource::fetch_catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of products
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with isis-core error handling.
/// Range: 11xxx for catalog errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// Catalog could not be read
    Unavailable = 11001,
    /// Catalog contents could not be parsed
    InvalidData = 11002,
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CatalogErrorCode {
        match self {
            CatalogError::Io { .. } => CatalogErrorCode::Unavailable,
            CatalogError::Json(_) => CatalogErrorCode::InvalidData,
        }
    }
}
