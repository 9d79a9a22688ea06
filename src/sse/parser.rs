//! SSE frame classification
//!
//! Maps a single line of the stream to at most one `StreamEvent`.

use serde_json::{Number, Value};

use crate::sse::events::{FrameError, StreamEvent};
use crate::sse::payloads::{ErrorPayload, SourcesPayload};

/// Literal prefix of event-carrying lines.
pub const DATA_PREFIX: &str = "data: ";

/// Classifies `data: <json>` lines into typed events.
///
/// Counts the frames it had to skip so a session can report them.
#[derive(Debug, Default)]
pub struct EventFrameParser {
    malformed: usize,
    ignored: usize,
}

impl EventFrameParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line.
    ///
    /// Returns `None` for lines without the `data: ` prefix, for unknown
    /// object types, for `null` and for payloads that fail to decode. Decode
    /// failures are logged and never abort the stream.
    pub fn classify(&mut self, line: &str) -> Option<StreamEvent> {
        match parse_frame(line) {
            Ok(Some(event)) => Some(event),
            Ok(None) => {
                if line.starts_with(DATA_PREFIX) {
                    self.ignored += 1;
                    tracing::debug!("Ignoring data frame without known event: {}", line.trim());
                }
                None
            }
            Err(e) => {
                self.malformed += 1;
                tracing::warn!("Skipping malformed data frame: {}", e);
                None
            }
        }
    }

    /// Frames that carried `data: ` but failed to decode.
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }

    /// Frames that decoded but carried no event we know.
    pub fn ignored_count(&self) -> usize {
        self.ignored
    }
}

/// Parse a line into an event.
///
/// - `Ok(None)` - not a data line, or nothing to emit
/// - `Ok(Some(event))` - a classified event
/// - `Err(error)` - the payload could not be decoded
pub fn parse_frame(line: &str) -> Result<Option<StreamEvent>, FrameError> {
    let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
        return Ok(None);
    };
    let payload = rest.trim();

    let value: Value = serde_json::from_str(payload).map_err(|source| FrameError::InvalidJson {
        payload: payload.to_string(),
        source,
    })?;

    classify_value(value)
}

/// Classify an already decoded payload.
fn classify_value(value: Value) -> Result<Option<StreamEvent>, FrameError> {
    match value {
        Value::Object(ref map) => {
            let event_type = map.get("type").and_then(Value::as_str).unwrap_or_default();
            match event_type {
                "sources" => {
                    let payload: SourcesPayload = serde_json::from_value(value.clone())
                        .map_err(|source| invalid_payload("sources", source))?;
                    Ok(Some(StreamEvent::Sources {
                        sources: payload.data.sources,
                    }))
                }
                "error" => {
                    let payload: ErrorPayload = serde_json::from_value(value.clone())
                        .map_err(|source| invalid_payload("error", source))?;
                    Ok(Some(StreamEvent::Error {
                        message: payload.message.as_ref().map(value_text).unwrap_or_default(),
                    }))
                }
                "done" => Ok(Some(StreamEvent::Done)),
                // Unknown kinds ("start", future additions) are skipped
                _ => Ok(None),
            }
        }
        // Arrays carry no `type`
        Value::Array(_) => Ok(None),
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(StreamEvent::TextChunk { text })),
        Value::Number(n) => Ok(Some(StreamEvent::TextChunk {
            text: number_text(&n),
        })),
        Value::Bool(b) => Ok(Some(StreamEvent::TextChunk {
            text: b.to_string(),
        })),
    }
}

/// Display text of an error message value. `null` is empty, strings are
/// taken as-is, anything else is its JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Whole-valued floats print without a fraction (`1.0` -> `1`, `1e3` -> `1000`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

fn invalid_payload(event_type: &str, source: serde_json::Error) -> FrameError {
    FrameError::InvalidPayload {
        event_type: event_type.to_string(),
        source,
    }
}
