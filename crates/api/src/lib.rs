//! HTTP server for the content-generation assistant.
//!
//! Exposes `POST /api/generate/{type}`, which forwards a prompt pair to the
//! completion provider with the server-held API key, plus `/health` and the
//! front-end (static bundle or dev-server relay).

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
