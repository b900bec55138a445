//! Text sanitizing and preview helpers
//!
//! Everything rendered through `dangerous_inner_html` goes through
//! `escape_text` first; previews are cut at a fixed character count.

use crate::truncate_chars;

/// Maximum number of characters shown in a card's body preview
pub const PREVIEW_CHARS: usize = 140;

/// Escape text for embedding into markup.
///
/// Replaces `& < > " '` with their named references, ampersand first so
/// already-produced references are not escaped twice.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped body with line breaks preserved as `<br>` elements
pub fn body_html(body: &str) -> String {
    escape_text(body).replace('\n', "<br>")
}

/// Body preview: a plain character-count cut with a trailing ellipsis
pub fn preview_text(body: &str) -> String {
    if body.chars().count() <= PREVIEW_CHARS {
        return body.to_string();
    }
    format!("{}…", truncate_chars(body, PREVIEW_CHARS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five_characters() {
        assert_eq!(
            escape_text(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // Ampersand is replaced first, so the references it produces survive
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
        assert_eq!(escape_text("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape_text("Hello, world"), "Hello, world");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_body_html_breaks_lines() {
        assert_eq!(body_html("a\nb<c"), "a<br>b&lt;c");
    }

    #[test]
    fn test_preview_short_body_verbatim() {
        let body = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview_text(&body), body);
        assert_eq!(preview_text("short"), "short");
    }

    #[test]
    fn test_preview_long_body_cut_with_marker() {
        let body = "x".repeat(200);
        let preview = preview_text(&body);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn test_preview_cut_respects_char_boundaries() {
        let body = "ü".repeat(150);
        let preview = preview_text(&body);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
    }
}
