//! Presenter backed by a [`MessageView`].

use std::sync::{Arc, Mutex, PoisonError};

use crate::sse::Source;
use crate::traits::Presenter;
use crate::view::MessageView;

/// Applies presenter calls to a shared message view.
///
/// Clones share the view; the caller keeps one handle to read the final HTML
/// after the session ends.
#[derive(Debug, Clone, Default)]
pub struct ViewPresenter {
    view: Arc<Mutex<MessageView>>,
}

impl ViewPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current view state.
    pub fn snapshot(&self) -> MessageView {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, apply: impl FnOnce(&mut MessageView)) {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut *view);
    }
}

impl Presenter for ViewPresenter {
    fn display_content(&self, html: &str) {
        self.update(|view| view.set_content(html));
    }

    fn display_sources(&self, sources: &[Source]) {
        self.update(|view| view.set_sources(sources));
    }

    fn display_error(&self, message: &str) {
        self.update(|view| view.set_error(message));
    }
}
