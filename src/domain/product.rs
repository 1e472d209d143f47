//! Catalog product

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::domain::specs::SpecValue;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: String,
    /// Category slug, e.g. `solar-panels` or `inverters`.
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[serde(default)]
    pub specs: HashMap<String, SpecValue>,
}

impl Product {
    pub fn new(id: impl Into<String>, brand: impl Into<String>, category: impl Into<String>) -> Self {
        Self { id: id.into(), name: String::new(), brand: brand.into(), category: category.into(), specs: HashMap::new() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self { self.name = name.into(); self }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// Numeric value of a spec key, if present and parseable.
    pub fn spec_number(&self, key: &str) -> Option<f64> {
        self.specs.get(key).and_then(SpecValue::as_number)
    }

    pub fn same_category(&self, other: &Product) -> bool { self.category == other.category }
    pub fn same_brand(&self, other: &Product) -> bool { self.brand == other.brand }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_defaults() {
        let p: Product = serde_json::from_str(r#"{"id":"p1","brand":"Trina","category":"solar-panels"}"#).unwrap();
        assert!(p.specs.is_empty());
        assert_eq!(p.name, "");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_spec_number() {
        let p = Product::new("p1", "Trina", "solar-panels").with_spec("wattage", "550W").with_spec("cells", "mono");
        assert_eq!(p.spec_number("wattage"), Some(550.0));
        assert_eq!(p.spec_number("cells"), None);
        assert_eq!(p.spec_number("capacity"), None);
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let p = Product::new("", "Trina", "");
        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("id"));
        assert!(fields.contains_key("category"));
        assert!(!fields.contains_key("brand"));
    }
}
