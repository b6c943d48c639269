//! Fripoblech Core - Shared domain types.
//!
//! This crate provides the types shared across Fripoblech components:
//! - `storefront` - Public-facing second-hand fashion storefront
//! - `integration-tests` - HTTP-level test suite
//!
//! # Architecture
//!
//! The core crate contains only types and their invariants - no I/O, no
//! HTTP, no templates. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, categories, conditions, and the session cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
