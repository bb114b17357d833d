//! Terminal helpers for the Isis catalog tools
//!
//! Provides shared CLI functionality:
//! - Status messages and headers
//! - Price, duration and count formatting
//! - Spinners for catalog loading

#![warn(missing_docs)]

pub mod output;
pub mod progress;
