//! Business logic services.

pub mod stylist;

pub use stylist::StylistService;
