//! Configuration module for the scraper
//!
//! This module provides `ScraperConfig` with its type-safe builder, and
//! `StoreConfig` for the document-store connection read from the environment.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod store;
pub mod types;

// Re-exports for public API
pub use builder::{ScraperConfigBuilder, WithListingUrl};
pub use store::StoreConfig;
pub use types::{ListingSelectors, ScraperConfig};
