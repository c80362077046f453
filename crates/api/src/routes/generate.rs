//! Route definitions for the generation proxy.
//!
//! ```text
//! POST   /{content_type}     generate
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Routes nested under `/api/generate`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{content_type}", post(generate::generate))
}
