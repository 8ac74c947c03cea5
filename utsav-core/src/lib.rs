//! Core types for the utsav API.
//!
//! This crate provides everything below the HTTP layer:
//! - `Festival`, `RegionalEvent` and `Metadata` record types
//! - the curated 2024 dataset
//! - query/filter operations over it (`Dataset`)

pub mod curated;
pub mod dataset;
pub mod error;
pub mod record;

// Re-export the main types at crate root for convenience
pub use dataset::Dataset;
pub use error::{UtsavError, UtsavResult};
pub use record::{Festival, Metadata, RegionalEvent};
