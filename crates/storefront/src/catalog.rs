//! The embedded product catalog.
//!
//! Products are loaded once at startup from a JSON fixture compiled into
//! the binary. The query surface (`all` / `by_category` / `featured` /
//! `get`) is stable even if the fixture is later replaced by a file or a
//! remote store.

use fripoblech_core::{Category, Product, ProductId};
use thiserror::Error;

/// Brand names shown in the home-page marquee.
pub const BRANDS: [&str; 8] = [
    "GUCCI",
    "NIKE",
    "ADIDAS",
    "RALPH LAUREN",
    "ZARA",
    "DIOR",
    "LEVI'S",
    "BALENCIAGA",
];

/// Embedded catalog fixture.
const CATALOG_JSON: &str = include_str!("../catalog.json");

/// Errors raised while loading the catalog fixture.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fixture is not valid JSON for the product shape.
    #[error("invalid catalog fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A price is negative.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),

    /// Sale price exceeds the original price.
    #[error("product {0} has price above original price")]
    PriceAboveOriginal(ProductId),
}

/// The immutable product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load and validate the embedded fixture.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the fixture fails to parse or violates
    /// the price and uniqueness invariants.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Load a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document fails to parse or violates
    /// the price and uniqueness invariants.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        validate(&products)?;
        Ok(Self { products })
    }

    /// The full product set in fixed, stable order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products in the given category, preserving the order of `all()`.
    ///
    /// Empty when no products match.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The first `n` products of `all()` - the "Nouveautés" selection.
    #[must_use]
    pub fn featured(&self, n: usize) -> &[Product] {
        self.products.get(..n.min(self.products.len())).unwrap_or(&[])
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

/// Check the catalog invariants: unique ids, non-negative prices, and
/// sale price no higher than the original price.
fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen: Vec<&ProductId> = Vec::with_capacity(products.len());
    for product in products {
        if seen.contains(&&product.id) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
        seen.push(&product.id);

        if product.price.is_sign_negative() || product.original_price.is_sign_negative() {
            return Err(CatalogError::NegativePrice(product.id.clone()));
        }
        if product.price > product.original_price {
            return Err(CatalogError::PriceAboveOriginal(product.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fripoblech_core::Condition;
    use rust_decimal::Decimal;

    #[test]
    fn test_embedded_fixture_loads() {
        let catalog = Catalog::load().expect("fixture is valid");
        assert_eq!(catalog.all().len(), 11);
    }

    #[test]
    fn test_fixture_order_is_stable() {
        let catalog = Catalog::load().expect("fixture is valid");
        let first = &catalog.all()[0];
        assert_eq!(first.id.as_str(), "1");
        assert_eq!(first.name, "Veste de Costume Vintage");
    }

    #[test]
    fn test_by_category_preserves_catalog_order() {
        let catalog = Catalog::load().expect("fixture is valid");
        let sport = catalog.by_category(Category::Sport);

        assert!(!sport.is_empty());
        assert!(sport.iter().all(|p| p.category == Category::Sport));

        let ids: Vec<&str> = sport.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = catalog
            .all()
            .iter()
            .filter(|p| p.category == Category::Sport)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_by_category_with_no_matches_is_empty() {
        let json = r#"[{
            "id": "1",
            "name": "Bottines Cuir",
            "brand": "Dr. Martens",
            "price": 95,
            "original_price": 190,
            "category": "chaussures",
            "size": "39",
            "condition": "Très bon",
            "image_url": "https://picsum.photos/seed/shoe2/400/500"
        }]"#;
        let catalog = Catalog::from_json(json).expect("valid");
        assert!(catalog.by_category(Category::Sport).is_empty());
    }

    #[test]
    fn test_featured_takes_the_first_n_in_order() {
        let catalog = Catalog::load().expect("fixture is valid");
        let featured = catalog.featured(4);

        assert_eq!(featured.len(), 4);
        assert_eq!(featured, &catalog.all()[..4]);
    }

    #[test]
    fn test_featured_clamps_to_catalog_size() {
        let catalog = Catalog::load().expect("fixture is valid");
        assert_eq!(catalog.featured(100).len(), catalog.all().len());
        assert!(catalog.featured(0).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::load().expect("fixture is valid");
        let product = catalog.get(&ProductId::from("8")).expect("exists");
        assert_eq!(product.name, "Air Jordan 1 Low");
        assert_eq!(product.price, Decimal::from(120));
        assert_eq!(product.condition, Condition::Good);

        assert!(catalog.get(&ProductId::from("999")).is_none());
    }

    #[test]
    fn test_price_above_original_is_rejected() {
        let json = r#"[{
            "id": "1",
            "name": "Blazer Croisé",
            "brand": "Zara",
            "price": 121,
            "original_price": 120,
            "category": "chic",
            "size": "S",
            "condition": "Neuf",
            "image_url": "https://picsum.photos/seed/chic3/400/500"
        }]"#;
        let err = Catalog::from_json(json).expect_err("must fail validation");
        assert!(matches!(err, CatalogError::PriceAboveOriginal(_)));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let json = r#"[
            {"id": "1", "name": "A", "brand": "Zara", "price": 10,
             "original_price": 20, "category": "chic", "size": "S",
             "condition": "Bon", "image_url": "https://example.test/a"},
            {"id": "1", "name": "B", "brand": "Zara", "price": 10,
             "original_price": 20, "category": "chic", "size": "M",
             "condition": "Bon", "image_url": "https://example.test/b"}
        ]"#;
        let err = Catalog::from_json(json).expect_err("must fail validation");
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }
}
