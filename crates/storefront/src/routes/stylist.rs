//! AI stylist route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Stylist query form data.
#[derive(Debug, Deserialize)]
pub struct StylistForm {
    pub query: String,
}

/// Stylist answer fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/stylist_answer.html")]
pub struct StylistAnswerTemplate {
    pub answer: String,
}

/// Submit a stylist query (HTMX).
///
/// Empty or whitespace-only queries are ignored: the handler replies 204
/// and HTMX leaves the widget untouched. The service itself always
/// resolves to a displayable string, so this handler cannot fail.
#[instrument(skip(state, form))]
pub async fn ask(State(state): State<AppState>, Form(form): Form<StylistForm>) -> Response {
    let query = form.query.trim();
    if query.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let answer = state.stylist().advise(query).await;
    StylistAnswerTemplate { answer }.into_response()
}
