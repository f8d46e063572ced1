//! Core types for the typeahead suggestion engine.
//!
//! Holds everything the engine and its lookups share but that carries no
//! runtime: queries and request ids, the [`Suggestion`](types::Suggestion)
//! record shape, configuration, errors, and the per-API normalizers that turn
//! raw JSON payloads into [`Item`](types::Item)s.

pub mod error;
pub mod sources;
pub mod types;

pub use error::{Error, LookupError, Result};
