//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The whole cart is stored in the session; there is nothing server-side
//! beyond that.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use fripoblech_core::{Cart, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub size: String,
    pub quantity: u32,
    pub price: Decimal,
    pub line_total: Decimal,
    pub image_url: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    id: line.product.id.to_string(),
                    name: line.product.name.clone(),
                    brand: line.product.brand.clone(),
                    size: line.product.size.clone(),
                    quantity: line.quantity,
                    price: line.product.price,
                    line_total: line.product.price * Decimal::from(line.quantity),
                    image_url: line.product.image_url.clone(),
                })
                .collect(),
            total: cart.total(),
            count: cart.count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session; absent means empty.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Store the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for the drawer, HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Cart drawer items fragment (HTMX).
#[instrument(skip(session))]
pub async fn items(session: Session) -> Result<CartItemsTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartItemsTemplate {
        cart: CartView::from(&cart),
    })
}

/// Cart count badge fragment (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.count(),
    })
}

/// Add one unit of a product to the cart (HTMX).
///
/// A product already in the cart gets its quantity incremented; anything
/// else is appended. Returns the count badge with triggers so the navbar
/// badge refreshes and the drawer opens - opening the drawer is view
/// policy, the cart itself only changes state.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let Some(product) = state.catalog().get(&id) else {
        return Err(AppError::NotFound(format!("product {id}")));
    };

    let mut cart = load_cart(&session).await?;
    cart.add(product.clone());
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated, open-cart")]),
        CartCountTemplate {
            count: cart.count(),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
///
/// Unknown product ids are a silent no-op. Returns the refreshed drawer
/// fragment.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.remove(&ProductId::new(form.product_id));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}
