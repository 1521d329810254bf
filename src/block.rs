// src/block.rs
//
// Output blocks: a flat sequence of paragraphs, each holding inline spans.
//
// - Span text is HTML source text, already escaped by whoever built it.
// - Blocks are tidied on construction: line-break runs collapse to a single space,
//   edges are trimmed, whitespace-only bold is unbolded, and equal neighbours merge.
// - A block that tidies down to nothing is never built.

use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// A heading demoted to a bold paragraph.
    HeadingParagraph,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    /// `None` when the spans hold no visible text.
    pub fn paragraph(spans: Vec<Span>) -> Option<Self> {
        Self::build(BlockKind::Paragraph, spans)
    }

    /// Every span of a heading paragraph is bold.
    pub fn heading(spans: Vec<Span>) -> Option<Self> {
        let spans = spans
            .into_iter()
            .map(|s| Span::bold(s.text))
            .collect();
        Self::build(BlockKind::HeadingParagraph, spans)
    }

    fn build(kind: BlockKind, spans: Vec<Span>) -> Option<Self> {
        let spans = tidy(spans);
        if spans.is_empty() {
            None
        } else {
            Some(Self { kind, spans })
        }
    }

    pub fn to_html(&self) -> String {
        let len: usize = self.spans.iter().map(|s| s.text.len() + 17).sum();
        let mut out = String::with_capacity(len + 7);
        out.push_str("<p>");
        for span in &self.spans {
            if span.bold {
                out.push_str("<strong>");
                out.push_str(&span.text);
                out.push_str("</strong>");
            } else {
                out.push_str(&span.text);
            }
        }
        out.push_str("</p>");
        out
    }
}

/// One block per line, in order.
pub fn serialize(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/* ================================ Escaping =============================== */

/// Escape `&`, `<` and `>` so plain text renders literally.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| matches!(c, '&' | '<' | '>'))
}

/// Escape bare `<` and `>` only; character references already in `s` survive.
pub fn escape_angles(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| matches!(c, '<' | '>'))
}

fn escape_with(s: &str, needs: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !s.chars().any(&needs) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' if needs(ch) => out.push_str("&amp;"),
            '<' if needs(ch) => out.push_str("&lt;"),
            '>' if needs(ch) => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/* ================================= Tidying =============================== */

// Collapse every whitespace run that contains a line break to a single space.
fn collapse_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0usize;
    let mut seg_start = 0usize;

    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            out.push_str(&text[seg_start..i]); // safe: ASCII boundary
            while out.ends_with([' ', '\t']) {
                out.pop();
            }
            out.push(' ');
            i += 1;
            while i < bytes.len() && matches!(bytes[i], b'\n' | b'\r' | b' ' | b'\t') {
                i += 1;
            }
            seg_start = i;
        } else {
            i += 1;
        }
    }
    if seg_start < bytes.len() {
        out.push_str(&text[seg_start..]);
    }
    Cow::Owned(out)
}

fn tidy(spans: Vec<Span>) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.text.is_empty() {
            continue;
        }
        let text = collapse_line_breaks(&span.text).into_owned();
        let bold = span.bold && !text.trim().is_empty();
        match out.last_mut() {
            Some(prev) if prev.bold == bold => prev.text.push_str(&text),
            _ => out.push(Span { text, bold }),
        }
    }

    while let Some(first) = out.first_mut() {
        let trimmed = first.text.trim_start();
        if trimmed.is_empty() {
            out.remove(0);
        } else {
            first.text = trimmed.to_string();
            break;
        }
    }
    while let Some(last) = out.last_mut() {
        let trimmed = last.text.trim_end();
        if trimmed.is_empty() {
            out.pop();
        } else {
            last.text.truncate(trimmed.len());
            break;
        }
    }
    out
}
