//! Markdown to HTML conversion for streamed answers
//!
//! Converts the cumulative transcript into a dense HTML fragment. The whole
//! transcript is re-converted on every chunk: output never depends on how the
//! text was split, and no tag is left open between renders. Total work over a
//! stream is quadratic in transcript length, which is fine at chat scale.
//!
//! Supported subset:
//! - Headings `#` to `####` -> `<h1>`..`<h4>` (content escaped, no bold)
//! - Bulleted items `-` / `*`, nested by 4-space indentation -> `<ul><li>`
//! - Bold `**text**` / `__text__` in items and paragraphs -> `<strong>`
//! - Horizontal rules `---` are swallowed
//! - Every other non-blank line -> `<p>`

mod inline;
mod line;

pub use inline::{escape_attr, escape_html, render_inline};
pub use line::{MarkdownLine, INDENT_WIDTH, MAX_HEADING_LEVEL};

/// Convert `text` to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    MarkdownRenderer::new().render(text)
}

/// Line-by-line converter with an explicit stack of open list levels.
///
/// The stack and the token buffer are reset at the start of every `render`,
/// so one renderer can be reused across the re-renders of a message.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    /// Open `<ul>` levels, outermost first
    list_stack: Vec<usize>,
    /// Output tokens of the current pass
    tokens: Vec<String>,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the HTML fragment for the full `text`.
    pub fn render(&mut self, text: &str) -> String {
        self.list_stack.clear();
        self.tokens.clear();

        for raw in text.split('\n') {
            let line = MarkdownLine::classify(raw);
            if line.closes_lists() {
                self.close_all_lists();
            }
            match line {
                MarkdownLine::Blank | MarkdownLine::Rule => {}
                MarkdownLine::Heading { level, content } => {
                    self.tokens
                        .push(format!("<h{level}>{}</h{level}>", escape_html(content)));
                }
                MarkdownLine::ListItem { level, content } => {
                    self.reconcile_lists(level);
                    self.tokens
                        .push(format!("<li>{}</li>", render_inline(content)));
                }
                MarkdownLine::Paragraph(content) => {
                    self.tokens.push(format!("<p>{}</p>", render_inline(content)));
                }
            }
        }
        self.close_all_lists();

        self.tokens.concat()
    }

    /// Bring the stack to the depth an item at `level` needs.
    ///
    /// Deeper lists are closed first; a new list opens only when the stack is
    /// exactly `level` deep. An item more than one level deeper than the
    /// current stack joins the innermost open list.
    fn reconcile_lists(&mut self, level: usize) {
        while self.list_stack.len() > level + 1 {
            self.list_stack.pop();
            self.tokens.push("</ul>".to_string());
        }
        if self.list_stack.len() == level {
            self.list_stack.push(level);
            self.tokens.push("<ul>".to_string());
        }
    }

    fn close_all_lists(&mut self) {
        while self.list_stack.pop().is_some() {
            self.tokens.push("</ul>".to_string());
        }
    }

    /// Open list levels left from the last pass; always empty after `render`.
    pub fn open_lists(&self) -> &[usize] {
        &self.list_stack
    }
}
