//! # Product Model
//!
//! A product is a flat record. The store assigns `id`; everything except
//! `name` and `price` is optional and serialized as `null` when absent.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

/// A stored product. Column names equal wire field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Chair")]
    pub name: String,
    pub location: Option<String>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub total_sold: Option<i64>,
    pub tax: Option<f64>,
    #[schema(example = 49.99)]
    pub price: f64,
    pub description: Option<String>,
}

impl Product {
    /// Build the response body for a create or update: the accepted input
    /// with the identifier merged in.
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            location: input.location,
            material: input.material,
            size: input.size,
            weight: input.weight,
            rating: input.rating,
            stock: input.stock,
            total_sold: input.total_sold,
            tax: input.tax,
            price: input.price,
            description: input.description,
        }
    }
}

/// Body of a create or update request.
///
/// Updates are full replacements: any optional field left out of the body is
/// written as NULL, overwriting whatever was stored before.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Chair")]
    pub name: String,
    pub location: Option<String>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub total_sold: Option<i64>,
    pub tax: Option<f64>,
    #[schema(example = 49.99)]
    pub price: f64,
    pub description: Option<String>,
}

/// Shape violations in a product input that parsing alone does not catch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Product name must not be empty")]
    EmptyName,

    #[error("Product price must be a finite number")]
    NonFinitePrice,

    #[error("Product price must not be negative: {0}")]
    NegativePrice(f64),
}

impl ProductInput {
    /// Minimal input with only the required fields set.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            location: None,
            material: None,
            size: None,
            weight: None,
            rating: None,
            stock: None,
            total_sold: None,
            tax: None,
            price,
            description: None,
        }
    }

    /// Check the constraints the store does not enforce on its own.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.name.trim().is_empty() {
            return Err(InputError::EmptyName);
        }
        if !self.price.is_finite() {
            return Err(InputError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(InputError::NegativePrice(self.price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_requires_name_and_price() {
        let missing_price = serde_json::from_value::<ProductInput>(json!({"name": "Chair"}));
        assert!(missing_price.is_err());

        let missing_name = serde_json::from_value::<ProductInput>(json!({"price": 10.0}));
        assert!(missing_name.is_err());
    }

    #[test]
    fn test_input_optional_fields_default_to_none() {
        let input: ProductInput =
            serde_json::from_value(json!({"name": "Chair", "price": 49.99, "stock": 3})).unwrap();

        assert_eq!(input.stock, Some(3));
        assert_eq!(input.location, None);
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_validate() {
        assert!(ProductInput::new("Chair", 0.0).validate().is_ok());
        assert_eq!(
            ProductInput::new("   ", 1.0).validate(),
            Err(InputError::EmptyName)
        );
        assert_eq!(
            ProductInput::new("Chair", -0.5).validate(),
            Err(InputError::NegativePrice(-0.5))
        );
        assert_eq!(
            ProductInput::new("Chair", f64::INFINITY).validate(),
            Err(InputError::NonFinitePrice)
        );
    }

    #[test]
    fn test_from_input_serializes_absent_fields_as_null() {
        let product = Product::from_input(1, ProductInput::new("Chair", 49.99));
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Chair");
        assert_eq!(value["price"], 49.99);
        assert!(value["location"].is_null());
        assert!(value["total_sold"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 12);
    }
}
