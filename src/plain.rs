// src/plain.rs
//
// Plain-text strategy: one paragraph per non-blank line; `#`-marked lines become
// bold paragraphs with the marker stripped.

use crate::block::{escape_text, Block, Span};
use crate::Options;

pub fn blocks(text: &str, options: &Options) -> Vec<Block> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line_block(line, options))
        .collect()
}

fn line_block(line: &str, options: &Options) -> Option<Block> {
    let text = |s: &str| {
        if options.escape_text {
            escape_text(s).into_owned()
        } else {
            s.to_string()
        }
    };
    match strip_heading_marker(line) {
        Some(title) => Block::heading(vec![Span::bold(text(title))]),
        None => Block::paragraph(vec![Span::plain(text(line))]),
    }
}

/// `^#+\s+` → the remainder after the marker.
fn strip_heading_marker(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches('#');
    if rest.len() == line.len() || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{serialize, BlockKind};

    fn run(text: &str) -> String {
        serialize(&blocks(text, &Options::default()))
    }

    #[test]
    fn wraps_trimmed_lines_in_order() {
        assert_eq!(
            run("  first \n\n\tsecond\r\n   \nthird"),
            "<p>first</p>\n<p>second</p>\n<p>third</p>"
        );
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(run("same\nsame"), "<p>same</p>\n<p>same</p>");
    }

    #[test]
    fn heading_marker_becomes_bold() {
        let out = blocks("### Title here", &Options::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, BlockKind::HeadingParagraph);
        assert_eq!(out[0].to_html(), "<p><strong>Title here</strong></p>");
    }

    #[test]
    fn marker_needs_trailing_whitespace() {
        assert_eq!(run("#hashtag"), "<p>#hashtag</p>");
        assert_eq!(run("#"), "<p>#</p>");
        assert_eq!(run("##   "), "<p>##</p>");
        assert_eq!(run("#\tTabbed"), "<p><strong>Tabbed</strong></p>");
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(blocks(" \n\r\n\t", &Options::default()).is_empty());
    }

    #[test]
    fn escapes_unless_verbatim() {
        assert_eq!(run("I <3 R&D"), "<p>I &lt;3 R&amp;D</p>");
        let verbatim = Options { escape_text: false };
        assert_eq!(serialize(&blocks("I <3 R&D", &verbatim)), "<p>I <3 R&D</p>");
    }
}
