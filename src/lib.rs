//! Bank Report Aggregation Service Library
//!
//! Collects client, product, movement and debit-card data from the bank's
//! upstream services and derives the reports exposed by the API.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
pub use modules::upstream;
