//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::BRANDS;
use crate::filters;
use crate::routes::category::ProductView;
use crate::state::AppState;

/// Number of products in the "Nouveautés" section.
const FEATURED_COUNT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Brand names for the marquee.
    pub brands: &'static [&'static str],
    /// New-arrivals product grid.
    pub featured: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = state
        .catalog()
        .featured(FEATURED_COUNT)
        .iter()
        .map(ProductView::from)
        .collect();

    HomeTemplate {
        brands: &BRANDS,
        featured,
    }
}
