//! Core types for Fripoblech.
//!
//! This module provides the catalog product shape and the session cart.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartLine};
pub use product::{Category, Condition, Product, ProductId};
