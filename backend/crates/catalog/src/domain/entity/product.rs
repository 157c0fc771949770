//! Product Entity

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_object::product_id::ProductId;

/// First failing product rule, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    #[error("id is required")]
    IdRequired,
    #[error("invalid id")]
    InvalidId,
    #[error("name is required")]
    NameRequired,
    #[error("price is required")]
    PriceRequired,
    #[error("invalid price")]
    InvalidPrice,
}

/// Product entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, ProductValidationError> {
        let product = Self {
            id: ProductId::new(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Rebuild a product loaded from storage
    pub fn restore(
        id: ProductId,
        name: String,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ProductValidationError> {
        let product = Self {
            id,
            name,
            price,
            created_at,
        };
        product.validate()?;
        Ok(product)
    }

    /// Same product with replaced fields, validated as a whole
    pub fn with_changes(
        &self,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductValidationError> {
        Self::restore(self.id, name.into(), price, self.created_at)
    }

    /// Report the first broken rule, if any
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.id.is_nil() {
            return Err(ProductValidationError::IdRequired);
        }
        if !self.id.is_well_formed() {
            return Err(ProductValidationError::InvalidId);
        }
        if self.name.is_empty() {
            return Err(ProductValidationError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(ProductValidationError::PriceRequired);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductValidationError::InvalidPrice);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new("Product 1", 10.0).unwrap();

        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.price, 10.0);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_name_is_required() {
        assert_eq!(
            Product::new("", 10.0).unwrap_err(),
            ProductValidationError::NameRequired
        );
    }

    #[test]
    fn test_price_is_required() {
        assert_eq!(
            Product::new("Product 1", 0.0).unwrap_err(),
            ProductValidationError::PriceRequired
        );
    }

    #[test]
    fn test_invalid_price() {
        assert_eq!(
            Product::new("Product 1", -10.0).unwrap_err(),
            ProductValidationError::InvalidPrice
        );
        assert_eq!(
            Product::new("Product 1", f64::NAN).unwrap_err(),
            ProductValidationError::InvalidPrice
        );
        assert_eq!(
            Product::new("Product 1", f64::INFINITY).unwrap_err(),
            ProductValidationError::InvalidPrice
        );
    }

    #[test]
    fn test_name_checked_before_price() {
        assert_eq!(
            Product::new("", -1.0).unwrap_err(),
            ProductValidationError::NameRequired
        );
    }

    #[test]
    fn test_missing_id() {
        let err = Product::restore(ProductId::nil(), "Pen".into(), 2.0, Utc::now()).unwrap_err();
        assert_eq!(err, ProductValidationError::IdRequired);
        assert_eq!(err.to_string(), "id is required");
    }

    #[test]
    fn test_with_changes_keeps_identity() {
        let product = Product::new("Notebook", 1500.0).unwrap();
        let updated = product.with_changes("Notebook Pro", 1800.0).unwrap();

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, "Notebook Pro");
        assert_eq!(updated.price, 1800.0);

        assert_eq!(
            product.with_changes("Notebook Pro", 0.0).unwrap_err(),
            ProductValidationError::PriceRequired
        );
    }
}
