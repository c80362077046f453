pub mod generate;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate/{content_type}                         generation proxy (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/generate", generate::router())
}
