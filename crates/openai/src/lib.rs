//! Chat-completion provider client.
//!
//! Defines the [`CompletionProvider`] seam the proxy endpoint talks to and
//! an OpenAI-compatible REST implementation, [`OpenAiApi`].

pub mod api;
pub mod messages;
pub mod provider;

pub use api::OpenAiApi;
pub use provider::{CompletionProvider, ProviderError};
