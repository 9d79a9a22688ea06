//! SSE event types and definitions
//!
//! Contains the StreamEvent enum with every event the chat endpoint can emit,
//! and the error type for `data:` frames that cannot be decoded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reference page the answer was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
}

impl Source {
    pub fn new(
        domain: impl Into<String>,
        path: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
            title: title.into(),
        }
    }

    /// Display URL for the page: `https://{domain}{path}`.
    pub fn url(&self) -> String {
        format!("https://{}{}", self.domain, self.path)
    }
}

/// Typed events decoded from `data:` lines of the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Fragment of the answer to append to the transcript
    TextChunk { text: String },
    /// Reference list for the answer
    Sources { sources: Vec<Source> },
    /// Error reported by the server; terminal for the answer content
    Error { message: String },
    /// Stream completed successfully
    Done,
}

impl StreamEvent {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamEvent::TextChunk { .. } => "text",
            StreamEvent::Sources { .. } => "sources",
            StreamEvent::Error { .. } => "error",
            StreamEvent::Done => "done",
        }
    }
}

/// Reasons a `data:` frame produced no event.
///
/// None of these are fatal: the parser logs them and the stream continues.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The payload after `data: ` is not valid JSON
    #[error("invalid JSON in data frame {payload:?}: {source}")]
    InvalidJson {
        payload: String,
        #[source]
        source: serde_json::Error,
    },
    /// A known event type whose fields do not match the expected shape
    #[error("invalid payload for event '{event_type}': {source}")]
    InvalidPayload {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
}
