//! Session data models.

/// Keys under which values are stored in the session.
pub mod session_keys {
    /// The visitor's cart, serialized as a whole.
    pub const CART: &str = "cart";
}
