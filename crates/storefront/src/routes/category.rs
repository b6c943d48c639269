//! Category page route handlers.
//!
//! One fixed route per category value, matching the original storefront
//! navigation (`/chaussures`, `/sport`, `/chic`).

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use fripoblech_core::{Category, Condition, Product};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub size: String,
    pub condition: &'static str,
    pub is_new: bool,
    pub image_url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            original_price: product.original_price,
            size: product.size.clone(),
            condition: product.condition.label(),
            is_new: product.condition == Condition::New,
            image_url: product.image_url.clone(),
        }
    }
}

/// Header background image per category.
const fn header_image(category: Category) -> &'static str {
    match category {
        Category::Shoes => {
            "https://images.unsplash.com/photo-1552346154-21d32810aba3?auto=format&fit=crop&w=1600&q=80"
        }
        Category::Sport => {
            "https://images.unsplash.com/photo-1517466787929-bc90951d0974?auto=format&fit=crop&w=1600&q=80"
        }
        Category::Chic => {
            "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?auto=format&fit=crop&w=1600&q=80"
        }
    }
}

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub title: &'static str,
    pub header_image_url: &'static str,
    pub products: Vec<ProductView>,
}

/// Render a category page.
fn show(state: &AppState, category: Category) -> CategoryTemplate {
    let products = state
        .catalog()
        .by_category(category)
        .into_iter()
        .map(ProductView::from)
        .collect();

    CategoryTemplate {
        title: category.title(),
        header_image_url: header_image(category),
        products,
    }
}

/// Display the shoes category page.
#[instrument(skip(state))]
pub async fn shoes(State(state): State<AppState>) -> impl IntoResponse {
    show(&state, Category::Shoes)
}

/// Display the sportswear category page.
#[instrument(skip(state))]
pub async fn sport(State(state): State<AppState>) -> impl IntoResponse {
    show(&state, Category::Sport)
}

/// Display the chic category page.
#[instrument(skip(state))]
pub async fn chic(State(state): State<AppState>) -> impl IntoResponse {
    show(&state, Category::Chic)
}
