//! Solar Storefront
//!
//! Catalog service for a solar-equipment storefront.
//!
//! ## Features
//! - Product catalog browsing by category and brand
//! - Related-product selection for product pages
//! - Numeric spec parsing (`"550W"`, `"5.5kWh"`)

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod related;

use thiserror::Error;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use domain::{Product, SpecValue};
pub use related::{select_related, select_related_with_rng, RelatedProductSelector};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    #[error("Catalog read error: {0}")]
    CatalogRead(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
