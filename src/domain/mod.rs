//! Domain types for the storefront catalog
pub mod product;
pub mod specs;

pub use product::Product;
pub use specs::{parse_leading_number, SpecValue, COMPARABLE_SPEC_KEYS};
