//! Configuration loading and schema definitions
//!
//! Settings shared by the catalog CLI and any other caller of the search library.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_CANDIDATES};
pub use schema::*;
