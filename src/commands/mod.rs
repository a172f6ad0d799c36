//! Command implementations

pub mod catalog;
pub mod classify;

pub use catalog::{CatalogSummary, summarize_catalog};
pub use classify::{Classification, classify_words};
