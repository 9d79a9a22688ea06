//! Per-line classification for the Markdown subset.
//!
//! Each source line is exactly one of the variants below; the converter only
//! keeps state (the open list stack) between lines, never inside one.

/// Spaces per list nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Deepest heading level recognised (`####`).
pub const MAX_HEADING_LEVEL: usize = 4;

/// Classified form of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownLine<'a> {
    /// Empty after trimming whitespace
    Blank,
    /// Three or more `-` and nothing else
    Rule,
    /// `#`..`####`, whitespace, content
    Heading { level: usize, content: &'a str },
    /// Optional indent, `-` or `*`, whitespace, content
    ListItem { level: usize, content: &'a str },
    /// Anything else; carries the whole line
    Paragraph(&'a str),
}

impl<'a> MarkdownLine<'a> {
    /// Classify a line (without its `\n`). A trailing `\r` is ignored.
    ///
    /// Priority: blank, rule, heading, list item, paragraph.
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return MarkdownLine::Blank;
        }
        if trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-') {
            return MarkdownLine::Rule;
        }
        if let Some(heading) = classify_heading(line) {
            return heading;
        }
        if let Some(item) = classify_list_item(line) {
            return item;
        }
        MarkdownLine::Paragraph(line)
    }

    /// Whether this line forces every open list closed.
    pub fn closes_lists(&self) -> bool {
        !matches!(self, MarkdownLine::ListItem { .. })
    }
}

fn classify_heading(line: &str) -> Option<MarkdownLine<'_>> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let content = marker_content(&line[level..])?;
    Some(MarkdownLine::Heading { level, content })
}

fn classify_list_item(line: &str) -> Option<MarkdownLine<'_>> {
    let body = line.trim_start();
    let indent_bytes = line.len() - body.len();
    let indent = line[..indent_bytes].chars().count();

    let after_bullet = body.strip_prefix('-').or_else(|| body.strip_prefix('*'))?;
    let content = marker_content(after_bullet)?;
    Some(MarkdownLine::ListItem {
        level: indent / INDENT_WIDTH,
        content,
    })
}

/// Content following a block marker: at least one whitespace character, then
/// at least one character of content.
///
/// Greedy on the whitespace, but when only whitespace follows the marker the
/// last whitespace character becomes the content, so `"#  "` is a heading
/// whose content is a single space.
fn marker_content(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim_start();
    if !content.is_empty() {
        return Some(content);
    }
    let mut chars = rest.char_indices();
    let (last_start, _) = chars.next_back()?;
    if last_start == 0 {
        // A single whitespace character leaves nothing for the content
        return None;
    }
    Some(&rest[last_start..])
}
