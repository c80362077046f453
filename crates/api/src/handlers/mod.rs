//! Request handlers.
//!
//! Handlers are thin: they validate the request envelope, delegate to the
//! provider in [`AppState`](crate::state::AppState), and map failures via
//! [`AppError`](crate::error::AppError).

pub mod frontend;
pub mod generate;
