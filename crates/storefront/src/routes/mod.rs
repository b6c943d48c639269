//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (hero, stylist widget, new arrivals)
//! GET  /health          - Health check
//!
//! # Categories
//! GET  /chaussures      - Shoes category page
//! GET  /sport           - Sportswear category page
//! GET  /chic            - Chic category page
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! GET  /cart/items      - Cart drawer fragment
//! GET  /cart/count      - Cart count badge fragment
//! POST /cart/add        - Add to cart (triggers cart-updated, open-cart)
//! POST /cart/remove     - Remove item (returns cart items fragment)
//!
//! # Stylist
//! POST /stylist         - Submit a query, returns the answer fragment
//! ```

pub mod cart;
pub mod category;
pub mod home;
pub mod stylist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Category pages
        .route("/chaussures", get(category::shoes))
        .route("/sport", get(category::sport))
        .route("/chic", get(category::chic))
        // Cart routes
        .nest("/cart", cart_routes())
        // Stylist widget
        .route("/stylist", post(stylist::ask))
}
