//! SSE (Server-Sent Events) frame decoding
//!
//! Turns the raw byte stream of the `/rag_search` endpoint into typed events.
//! Pipeline:
//! - `Utf8Decoder` - bytes to text, never splitting a multi-byte character
//! - `LineBuffer` - text to complete `\n`-terminated lines
//! - `EventFrameParser` - `data: <json>` lines to `StreamEvent`s
//!
//! Blank lines, `:` keep-alive comments and any other non-`data: ` lines are
//! ignored. Each `data: ` line carries exactly one event.

mod decoder;
mod events;
mod line_buffer;
mod parser;
mod payloads;

pub use decoder::Utf8Decoder;
pub use events::{FrameError, Source, StreamEvent};
pub use line_buffer::LineBuffer;
pub use parser::{EventFrameParser, DATA_PREFIX};
