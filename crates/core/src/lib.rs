//! Content Usher domain library.
//!
//! Holds everything the generation pipeline agrees on without doing any
//! network I/O: content types and their prompt templates, typed form inputs,
//! the response models the prompts ask for, the project store, and preview
//! rendering of generated content.

pub mod content_type;
pub mod error;
pub mod forms;
pub mod models;
pub mod preview;
pub mod project;
pub mod prompts;
pub mod store;
pub mod types;
