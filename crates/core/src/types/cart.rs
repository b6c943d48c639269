//! Session cart with id-keyed line merging.
//!
//! The cart is held in the visitor's session only - nothing is persisted
//! across sessions. Lines keep insertion order for display. Line identity
//! is the product id: every catalog id carries exactly one fixed size, so
//! adding the same product twice merges into a single line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// One line in the cart: a product and how many of it.
///
/// Invariant: `quantity >= 1`. A line that would reach zero is removed,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// The session-scoped shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// If a line with the same product id exists, its quantity is
    /// incremented and it keeps its position; otherwise a new line with
    /// quantity 1 is appended. Always succeeds.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the line with the given product id.
    ///
    /// An id with no matching line is a silent no-op.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.product.id != id);
    }

    /// Total number of units across all lines. Zero for an empty cart.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total at sale prices (never the original price).
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.product.price * Decimal::from(l.quantity))
            .sum()
    }
}
