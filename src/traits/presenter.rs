//! Presentation trait abstraction.
//!
//! The stream session never touches a page or terminal directly; it is handed
//! a `Presenter` at construction and reports every visible change through it.

use crate::sse::Source;

/// Receiver of the visible updates of one assistant message.
///
/// Calls are side effects with no failure mode at this boundary.
pub trait Presenter: Send {
    /// Replace the message content with `html`.
    fn display_content(&self, html: &str);

    /// Show the reference list below the content.
    fn display_sources(&self, sources: &[Source]);

    /// Replace the message content with an error `message`.
    fn display_error(&self, message: &str);
}

impl<P: Presenter + Sync> Presenter for &P {
    fn display_content(&self, html: &str) {
        (**self).display_content(html)
    }

    fn display_sources(&self, sources: &[Source]) {
        (**self).display_sources(sources)
    }

    fn display_error(&self, message: &str) {
        (**self).display_error(message)
    }
}
