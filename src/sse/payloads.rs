//! SSE payload deserialization structs
//!
//! Internal structs for the object-shaped payloads the server sends:
//! `{"type":"sources","data":{"sources":[...]}}` and
//! `{"type":"error","message":"..."}`.

use serde::Deserialize;
use serde_json::Value;

use crate::sse::events::Source;

/// `sources` event payload
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SourcesPayload {
    pub data: SourcesData,
}

/// Nested `data` object of a `sources` event
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SourcesData {
    pub sources: Vec<Source>,
    /// Sent by the server alongside the list; informational only
    #[serde(default)]
    #[allow(dead_code)]
    pub source_count: Option<usize>,
}

/// `error` event payload
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorPayload {
    /// Usually a string; `null`, numbers and objects also occur
    #[serde(default)]
    pub message: Option<Value>,
}
