//! Inline text handling: HTML escaping and bold markers.

/// Escape text for use inside an HTML element.
///
/// Matches how a browser serializes a text node: `&`, `<`, `>` and the
/// no-break space are replaced; quotes are left alone.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}

/// Escape `text` and turn `**bold**` / `__bold__` spans into `<strong>`.
///
/// Escaping runs first; neither marker character is touched by it, so the
/// spans are found exactly where they were in the raw text and the inserted
/// tags are never escaped. `**` pairs are resolved before `__` pairs.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let starred = replace_bold(&escaped, "**");
    replace_bold(&starred, "__")
}

/// Replace every `{marker}content{marker}` with `<strong>content</strong>`.
///
/// Leftmost, shortest match with at least one character of content; spans do
/// not overlap. Unpaired markers stay literal.
fn replace_bold(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(marker) {
        let content_start = open + marker.len();
        let Some(first) = rest[content_start..].chars().next() else {
            break;
        };
        // Content is non-empty, so the closing marker starts after its first char
        let search_from = content_start + first.len_utf8();
        let Some(close_offset) = rest[search_from..].find(marker) else {
            // No closing marker anywhere later, so no later opener can pair either
            break;
        };
        let close = search_from + close_offset;

        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(&rest[content_start..close]);
        out.push_str("</strong>");
        rest = &rest[close + marker.len()..];
    }

    out.push_str(rest);
    out
}
