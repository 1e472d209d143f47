//! In-memory product catalog

use std::collections::HashMap;
use std::path::Path;
use validator::Validate;

use crate::domain::Product;
use crate::{Result, StorefrontError};

/// Products keyed by id, kept in load order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Reads a JSON array of products from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        let catalog = Self::from_products(products)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Builds a catalog, rejecting invalid products and repeated ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            validate_product(product)?;
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(StorefrontError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    pub fn get(&self, id: &str) -> Option<&Product> { self.index.get(id).map(|&i| &self.products[i]) }
    pub fn products(&self) -> &[Product] { &self.products }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    /// Products matching the optional category and brand, in catalog order.
    /// Both compare ASCII case-insensitively so query strings need not match
    /// the catalog's casing.
    pub fn filter<'a>(&'a self, category: Option<&'a str>, brand: Option<&'a str>) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| {
            category.map_or(true, |c| p.category.eq_ignore_ascii_case(c)) && brand.map_or(true, |b| p.brand.eq_ignore_ascii_case(b))
        })
    }
}

pub fn validate_product(product: &Product) -> Result<()> {
    product.validate().map_err(|e| StorefrontError::InvalidProduct { id: product.id.clone(), reason: e.to_string() })
}
