//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - opens the SSE byte stream
//! - [`Presenter`] - displays content, sources and errors of a message

pub mod http;
pub mod presenter;

pub use http::{ByteStream, Headers, HttpClient, HttpError};
pub use presenter::Presenter;
