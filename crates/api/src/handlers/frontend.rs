//! Front-end serving for every path the API does not claim.
//!
//! In static mode the compiled bundle is served from disk with an SPA
//! fallback to `index.html`. In development mode requests are relayed to the
//! front-end dev server so the browser only ever talks to one origin.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServeMode;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Largest request body relayed to the dev server.
pub const MAX_PROXY_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Install the fallback for the configured [`ServeMode`].
pub fn attach(router: Router<AppState>, mode: &ServeMode) -> Router<AppState> {
    match mode {
        ServeMode::Static { dir } => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        ServeMode::Development { .. } => router.fallback(dev_proxy),
    }
}

/// Relay a request to the dev server and stream its answer back unchanged.
pub async fn dev_proxy(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    let ServeMode::Development { upstream } = &state.config.serve_mode else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let (parts, body) = request.into_parts();
    let path = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{upstream}{path}");

    let body = to_bytes(body, MAX_PROXY_BODY_BYTES)
        .await
        .map_err(|e| AppError::DevProxy(e.to_string()))?;

    let mut headers = forwardable(&parts.headers);
    headers.remove(axum::http::header::HOST);

    let upstream_response = state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%url, error = %e, "Dev server request failed");
            AppError::DevProxy(e.to_string())
        })?;

    let status = upstream_response.status();
    let headers = forwardable(upstream_response.headers());
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| AppError::DevProxy(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}
