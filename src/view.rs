//! HTML for one chat turn.
//!
//! `MessageView` holds the visible state of an assistant message (latest
//! content fragment, error, sources) and assembles the markup the page shows.

use crate::markdown::{escape_attr, escape_html};
use crate::sse::Source;

/// Markup of the user's question.
pub fn user_message_html(query: &str) -> String {
    format!(
        "<div class=\"message user-message\"><div class=\"message-role\">You</div><div class=\"message-content\">{}</div></div>",
        escape_html(query)
    )
}

/// Reference list block, numbered from 1.
pub fn sources_html(sources: &[Source]) -> String {
    let mut html = String::from("<div class=\"sources\"><div class=\"sources-title\">Sources:</div>");
    for (index, source) in sources.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"source-item\"><a class=\"source-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}. {}</a></div>",
            escape_attr(&source.url()),
            index + 1,
            escape_html(&source.title)
        ));
    }
    html.push_str("</div>");
    html
}

/// What the message body currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Body {
    #[default]
    Empty,
    Content(String),
    Error(String),
}

/// Visible state of one assistant message.
#[derive(Debug, Clone, Default)]
pub struct MessageView {
    body: Body,
    sources: Option<Vec<Source>>,
}

impl MessageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the body with a rendered fragment.
    pub fn set_content(&mut self, html: &str) {
        self.body = Body::Content(html.to_string());
    }

    /// Replace the body with an error message.
    pub fn set_error(&mut self, message: &str) {
        self.body = Body::Error(message.to_string());
    }

    pub fn set_sources(&mut self, sources: &[Source]) {
        self.sources = Some(sources.to_vec());
    }

    /// Inner HTML of the message content element.
    pub fn content_html(&self) -> String {
        match &self.body {
            Body::Empty => String::new(),
            Body::Content(html) => html.clone(),
            Body::Error(message) => format!("Error: {}", escape_html(message)),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, Body::Error(_))
    }

    pub fn sources(&self) -> Option<&[Source]> {
        self.sources.as_deref()
    }

    /// Full assistant message markup.
    pub fn to_html(&self) -> String {
        let sources = self
            .sources
            .as_deref()
            .map(sources_html)
            .unwrap_or_default();
        format!(
            "<div class=\"message assistant-message\"><div class=\"message-role\">Assistant</div><div class=\"message-content\">{}</div>{}</div>",
            self.content_html(),
            sources
        )
    }
}
