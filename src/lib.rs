//! ragchat - streaming client for a retrieval-augmented search server
//!
//! The server answers a query with Server-Sent Events: text chunks, a source
//! list, and a terminal `done` or `error` frame. This crate decodes that
//! stream, re-renders the growing answer from its markdown subset into HTML,
//! and reports every visible change to a [`traits::Presenter`].

pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod markdown;
pub mod session;
pub mod sse;
pub mod traits;
pub mod view;

pub use client::ChatClient;
pub use session::{SessionOutcome, StreamSession};
