// src/paste.rs
//
// Paste boundary: pick what a paste inserts into the document.
//
// - An HTML flavour wins over plain text when it has any content.
// - The HTML flavour is reduced to its fragment: the span between
//   <!--StartFragment--> and <!--EndFragment--> if marked, else the inside of
//   <body>, else the whole payload.

use crate::tag::{find_ignore_ascii_case, find_tag_end, is_ws};
use memchr::memmem;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PastePayload {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl PastePayload {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            html: None,
            text: Some(text.into()),
        }
    }

    /// The string to insert at the caret, if any.
    pub fn resolve(&self) -> Option<&str> {
        let html = self
            .html
            .as_deref()
            .map(fragment_markup)
            .filter(|m| !m.trim().is_empty());
        html.or(self.text.as_deref())
    }
}

/// Strip the document wrapper a clipboard puts around copied markup.
pub fn fragment_markup(html: &str) -> &str {
    let s = html.as_bytes();

    if let Some(start) = memmem::find(s, b"<!--StartFragment-->") {
        let from = start + b"<!--StartFragment-->".len();
        let to = memmem::find(&s[from..], b"<!--EndFragment-->").map_or(s.len(), |off| from + off);
        return html[from..to].trim();
    }

    if let Some(open) = find_ignore_ascii_case(s, b"<body", 0) {
        let boundary = s.get(open + 5).map_or(true, |&b| b == b'>' || b == b'/' || is_ws(b));
        if boundary {
            if let Some(gt) = find_tag_end(s, open) {
                let from = gt + 1;
                let to = memmem::rfind(&s[from..].to_ascii_lowercase(), b"</body")
                    .map_or(s.len(), |off| from + off);
                return html[from..to].trim();
            }
        }
    }

    html.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_flavour_wins() {
        let p = PastePayload {
            html: Some("<b>x</b>".into()),
            text: Some("x".into()),
        };
        assert_eq!(p.resolve(), Some("<b>x</b>"));
    }

    #[test]
    fn empty_html_falls_back_to_text() {
        let p = PastePayload {
            html: Some("<html><body>  </body></html>".into()),
            text: Some("plain".into()),
        };
        assert_eq!(p.resolve(), Some("plain"));
        assert_eq!(PastePayload::default().resolve(), None);
    }

    #[test]
    fn fragment_markers_clip() {
        let html = "<html><body>\r\n<!--StartFragment--><p>a</p><!--EndFragment-->\r\n</body></html>";
        assert_eq!(fragment_markup(html), "<p>a</p>");
    }

    #[test]
    fn body_wrapper_is_stripped() {
        let html = "<meta charset='utf-8'><HTML><head><title>t</title></head><Body class=\"x\">\n<p>a</p>\n</BODY></HTML>";
        assert_eq!(fragment_markup(html), "<p>a</p>");
    }

    #[test]
    fn unwrapped_markup_passes_through() {
        assert_eq!(fragment_markup("  <p>a</p> "), "<p>a</p>");
        assert_eq!(fragment_markup("<bodyguard>x</bodyguard>"), "<bodyguard>x</bodyguard>");
    }
}
