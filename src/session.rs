//! One streamed chat answer, from response bytes to presenter calls.
//!
//! `StreamSession` owns the decoding pipeline and the transcript of a single
//! request:
//!
//! ```text
//! bytes -> Utf8Decoder -> LineBuffer -> EventFrameParser -> dispatch
//!     TextChunk -> transcript -> MarkdownRenderer -> display_content
//!     Sources   -> retained until Done -> display_sources
//!     Error     -> display_error, rest of the stream drained and ignored
//! ```
//!
//! The read loop is sequential; nothing else touches the session's state.

use bytes::Bytes;
use futures_util::{Stream, StreamExt};

use crate::error::SessionError;
use crate::markdown::MarkdownRenderer;
use crate::sse::{EventFrameParser, LineBuffer, Source, StreamEvent, Utf8Decoder};
use crate::traits::{HttpError, Presenter};

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// `done` was received
    Completed,
    /// The server sent an `error` event with this message
    UpstreamError(String),
    /// Transport failure or truncated stream; the generic message was shown
    Failed(SessionError),
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Streaming,
    Errored(String),
    Done,
}

/// Drives one response stream to completion.
pub struct StreamSession<P: Presenter> {
    presenter: P,
    decoder: Utf8Decoder,
    lines: LineBuffer,
    parser: EventFrameParser,
    renderer: MarkdownRenderer,
    transcript: String,
    sources: Option<Vec<Source>>,
    phase: Phase,
    chunks: usize,
}

impl<P: Presenter> StreamSession<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            decoder: Utf8Decoder::new(),
            lines: LineBuffer::new(),
            parser: EventFrameParser::new(),
            renderer: MarkdownRenderer::new(),
            transcript: String::new(),
            sources: None,
            phase: Phase::Streaming,
            chunks: 0,
        }
    }

    /// Read `source` until it ends and report the outcome.
    ///
    /// `source` is the result of opening the request; an error there (refused
    /// connection, non-OK status) fails the session before any content.
    pub async fn run<S>(mut self, source: Result<S, HttpError>) -> SessionOutcome
    where
        S: Stream<Item = Result<Bytes, HttpError>> + Unpin,
    {
        let mut stream = match source {
            Ok(stream) => stream,
            Err(e) => return self.fail(SessionError::Transport(e)),
        };
        tracing::info!("Stream opened");

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => self.feed(&bytes),
                Err(e) if self.phase == Phase::Streaming => {
                    return self.fail(SessionError::Transport(e));
                }
                Err(e) => {
                    tracing::debug!("Read error after stream end ignored: {}", e);
                    break;
                }
            }
        }

        self.finish()
    }

    /// Feed one chunk of response bytes through the pipeline.
    pub fn feed(&mut self, bytes: &[u8]) {
        let text = self.decoder.decode(bytes);
        for line in self.lines.feed(&text) {
            if let Some(event) = self.parser.classify(&line) {
                self.dispatch(event);
            }
        }
    }

    /// End of stream: drop any partial line and settle the outcome.
    pub fn finish(mut self) -> SessionOutcome {
        if self.decoder.finish().is_some() {
            tracing::debug!("Stream ended inside a multi-byte character");
        }
        if let Some(partial) = self.lines.finish() {
            tracing::debug!("Dropping unterminated final line: {:?}", partial);
        }

        tracing::info!(
            chunks = self.chunks,
            malformed = self.parser.malformed_count(),
            ignored = self.parser.ignored_count(),
            "Stream closed"
        );

        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Done => SessionOutcome::Completed,
            Phase::Errored(message) => SessionOutcome::UpstreamError(message),
            Phase::Streaming => self.fail(SessionError::Truncated),
        }
    }

    fn dispatch(&mut self, event: StreamEvent) {
        if self.phase != Phase::Streaming {
            tracing::debug!("Ignoring {} event after stream end", event.kind());
            return;
        }

        match event {
            StreamEvent::TextChunk { text } => {
                self.chunks += 1;
                self.transcript.push_str(&text);
                let html = self.renderer.render(&self.transcript);
                self.presenter.display_content(&html);
            }
            StreamEvent::Sources { sources } => {
                if self.sources.is_some() {
                    tracing::debug!("Replacing previously received sources");
                }
                tracing::debug!("Received {} sources", sources.len());
                self.sources = Some(sources);
            }
            StreamEvent::Error { message } => {
                tracing::warn!("Server reported error: {}", message);
                self.presenter.display_error(&message);
                self.phase = Phase::Errored(message);
            }
            StreamEvent::Done => {
                if let Some(sources) = &self.sources {
                    self.presenter.display_sources(sources);
                }
                self.phase = Phase::Done;
            }
        }
    }

    fn fail(self, error: SessionError) -> SessionOutcome {
        tracing::warn!(
            code = error.error_code(),
            status = ?error.status(),
            "Chat stream failed: {}",
            error
        );
        self.presenter.display_error(error.user_message());
        SessionOutcome::Failed(error)
    }

    /// Everything received so far, in arrival order.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Sources received so far (shown only once `done` arrives).
    pub fn sources(&self) -> Option<&[Source]> {
        self.sources.as_deref()
    }
}
