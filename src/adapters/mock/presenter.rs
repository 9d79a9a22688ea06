//! Recording presenter for testing.
//!
//! Every presenter call is appended to a shared log so tests can assert the
//! exact sequence a session produced.

use std::sync::{Arc, Mutex, PoisonError};

use crate::sse::Source;
use crate::traits::Presenter;

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Content(String),
    Sources(Vec<Source>),
    Error(String),
}

/// Presenter that records calls instead of displaying them.
///
/// Clones share the same log, so a test keeps one handle and gives the other
/// to the session.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: PresenterCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    /// All calls in order.
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent content fragment, if any.
    pub fn last_content(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            PresenterCall::Content(html) => Some(html),
            _ => None,
        })
    }

    pub fn content_count(&self) -> usize {
        self.count(|call| matches!(call, PresenterCall::Content(_)))
    }

    pub fn error_count(&self) -> usize {
        self.count(|call| matches!(call, PresenterCall::Error(_)))
    }

    pub fn sources_count(&self) -> usize {
        self.count(|call| matches!(call, PresenterCall::Sources(_)))
    }

    fn count(&self, predicate: impl Fn(&PresenterCall) -> bool) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|call| predicate(call))
            .count()
    }
}

impl Presenter for RecordingPresenter {
    fn display_content(&self, html: &str) {
        self.push(PresenterCall::Content(html.to_string()));
    }

    fn display_sources(&self, sources: &[Source]) {
        self.push(PresenterCall::Sources(sources.to_vec()));
    }

    fn display_error(&self, message: &str) {
        self.push(PresenterCall::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let presenter = RecordingPresenter::new();
        presenter.display_content("<p>a</p>");
        presenter.display_error("oops");
        presenter.display_sources(&[Source::new("d", "/p", "t")]);

        assert_eq!(
            presenter.calls(),
            vec![
                PresenterCall::Content("<p>a</p>".to_string()),
                PresenterCall::Error("oops".to_string()),
                PresenterCall::Sources(vec![Source::new("d", "/p", "t")]),
            ]
        );
        assert_eq!(presenter.content_count(), 1);
        assert_eq!(presenter.error_count(), 1);
        assert_eq!(presenter.sources_count(), 1);
    }

    #[test]
    fn test_clone_shares_log() {
        let presenter = RecordingPresenter::new();
        let handle = presenter.clone();
        presenter.display_content("x");
        presenter.display_content("y");
        assert_eq!(handle.last_content().as_deref(), Some("y"));
    }

    #[test]
    fn test_reference_is_presenter() {
        let presenter = RecordingPresenter::new();
        let by_ref: &RecordingPresenter = &presenter;
        Presenter::display_error(&by_ref, "via ref");
        assert_eq!(presenter.error_count(), 1);
    }
}
