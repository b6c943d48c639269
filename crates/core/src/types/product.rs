//! Catalog product types.
//!
//! Products are immutable records defined at process start. Categories and
//! conditions are closed enumerations so an invalid value is a
//! deserialization error, never a runtime surprise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Product category.
///
/// Wire values match the category slugs used in URLs and in the catalog
/// fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "chaussures")]
    Shoes,
    #[serde(rename = "sport")]
    Sport,
    #[serde(rename = "chic")]
    Chic,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Self; 3] = [Self::Shoes, Self::Sport, Self::Chic];

    /// URL slug for this category (`/chaussures`, `/sport`, `/chic`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Shoes => "chaussures",
            Self::Sport => "sport",
            Self::Chic => "chic",
        }
    }

    /// Display title for category pages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Shoes => "Chaussures",
            Self::Sport => "Sportswear",
            Self::Chic => "Chic & Élégance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Condition of a second-hand item.
///
/// Wire values are the French labels shown to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Neuf")]
    New,
    #[serde(rename = "Très bon")]
    VeryGood,
    #[serde(rename = "Bon")]
    Good,
}

impl Condition {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "Neuf",
            Self::VeryGood => "Très bon",
            Self::Good => "Bon",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog product.
///
/// `price` is the sale price; `original_price` is the new-retail reference
/// price. The catalog validates `price <= original_price` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub category: Category,
    /// Clothing or shoe size; format varies by category.
    pub size: String,
    pub condition: Condition,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).expect("serialize");
            assert_eq!(json, format!("\"{}\"", category.slug()));
            let back: Category = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_condition_wire_values_are_french_labels() {
        let condition: Condition = serde_json::from_str("\"Très bon\"").expect("deserialize");
        assert_eq!(condition, Condition::VeryGood);
        assert_eq!(condition.label(), "Très bon");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = serde_json::from_str::<Category>("\"accessoires\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_product_deserializes_from_fixture_shape() {
        let json = r#"{
            "id": "8",
            "name": "Air Jordan 1 Low",
            "brand": "Nike",
            "price": 120,
            "original_price": 180,
            "category": "chaussures",
            "size": "42",
            "condition": "Bon",
            "image_url": "https://picsum.photos/seed/shoe1/400/500"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id.as_str(), "8");
        assert_eq!(product.category, Category::Shoes);
        assert_eq!(product.condition, Condition::Good);
        assert_eq!(product.price, Decimal::from(120));
    }
}
