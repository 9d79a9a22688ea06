//! Error types for chat sessions.
//!
//! Errors are scoped to one session and never fatal to the caller:
//!
//! | Kind | Where | Handling |
//! |------|-------|----------|
//! | malformed frame | `sse::FrameError` | logged, stream continues |
//! | unknown event type | parser | ignored |
//! | transport failure | `SessionError::Transport` | generic message, session ends |
//! | truncated stream | `SessionError::Truncated` | generic message, session ends |
//! | upstream error event | `SessionOutcome::UpstreamError` | shown verbatim, stream drained |
//! | empty query | `ChatError::EmptyQuery` | no request is made |

mod stream;

pub use stream::{ChatError, SessionError, GENERIC_FAILURE_MESSAGE};
