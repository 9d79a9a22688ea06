//! Common test utilities for integration tests.
//!
//! Frame builders for the server's SSE wire format and helpers that drive a
//! `StreamSession` over canned chunks.
//!
//! # Example
//!
//! ```ignore
//! use common::{text_frame, done_frame, run_chunks};
//!
//! let (outcome, presenter) = run_chunks(&[text_frame("Hi").as_bytes(), done_frame().as_bytes()]);
//! ```

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use ragchat::sse::Source;
use ragchat::{SessionOutcome, StreamSession};
use serde_json::json;

/// `data:` frame carrying a bare JSON string chunk.
#[allow(dead_code)]
pub fn text_frame(text: &str) -> String {
    format!("data: {}\n\n", json!(text))
}

/// Terminal success frame.
#[allow(dead_code)]
pub fn done_frame() -> String {
    "data: {\"type\":\"done\"}\n\n".to_string()
}

/// Stream start marker the server sends first.
#[allow(dead_code)]
pub fn start_frame() -> String {
    "data: {\"type\":\"start\"}\n\n".to_string()
}

#[allow(dead_code)]
pub fn error_frame(message: &str) -> String {
    format!(
        "data: {}\n\n",
        json!({ "type": "error", "message": message })
    )
}

#[allow(dead_code)]
pub fn sources_frame(sources: &[Source]) -> String {
    format!(
        "data: {}\n\n",
        json!({
            "type": "sources",
            "data": { "sources": sources, "source_count": sources.len() }
        })
    )
}

/// A few typical search results.
#[allow(dead_code)]
pub fn sample_sources() -> Vec<Source> {
    vec![
        Source::new("docs.rs", "/tokio/latest/tokio/", "Tokio docs"),
        Source::new("en.wikipedia.org", "/wiki/Server-sent_events", "Server-sent events"),
    ]
}

/// Feed `chunks` through a fresh session synchronously.
#[allow(dead_code)]
pub fn run_chunks(chunks: &[&[u8]]) -> (SessionOutcome, RecordingPresenter) {
    let presenter = RecordingPresenter::new();
    let mut session = StreamSession::new(presenter.clone());
    for chunk in chunks {
        session.feed(chunk);
    }
    (session.finish(), presenter)
}
