//! Terminal output formatting
//!
//! Display utilities for command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_catalog_summary, print_classifications};
