//! Request client for the generation proxy.
//!
//! [`GenerationClient`] turns typed form inputs into prompt pairs, posts them
//! to `POST /api/generate/{type}` and decodes the reply into the response
//! models from [`usher_core::models`].

pub mod client;
pub mod error;

pub use client::{GenerationClient, DEFAULT_TIMEOUT};
pub use error::ClientError;
