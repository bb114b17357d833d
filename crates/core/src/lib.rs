//! Core utilities shared by the Isis catalog tools
//!
//! This crate provides functionality used by the search library's callers:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with environment overrides and validation
//!
//! # Example
//!
//! ```rust,no_run
//! use isis_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("Page size: {}", config.schema.search.page_size);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, LoggingConfig, SearchSettings};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
