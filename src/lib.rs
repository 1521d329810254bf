// src/lib.rs
//
// paraforma — text/HTML to canonical <p> paragraphs
//
// - Plain text: one paragraph per non-blank trimmed line; `# Title` lines become
//   bold paragraphs.
// - Markup (pasted HTML): parsed leniently and flattened; headings become bold
//   paragraphs, containers are looked through, <b>/<strong> survive as <strong>,
//   every other tag is stripped with its text kept.
// - Output: one `<p>` per line, joined by '\n'. Empty input gives empty output.
// - Normalization never fails and never touches global state.

pub mod block;
pub mod classify;
pub mod clipboard;
pub mod fragment;
pub mod labels;
pub mod metrics;
pub mod paste;
pub mod plain;
pub mod render;
pub mod session;
pub mod tag;
pub mod tree;

pub use block::{Block, BlockKind, Span};
pub use classify::{classify, Input};
pub use metrics::Metrics;
pub use paste::PastePayload;
pub use session::{Document, Language, Session, ViewMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Escape `&`, `<`, `>` in plain-text lines. Off reproduces the verbatim
    /// behaviour, where typed markup goes live in the preview.
    pub escape_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { escape_text: true }
    }
}

/// Normalize with default [`Options`].
pub fn normalize(input: &str) -> String {
    normalize_with(input, &Options::default())
}

pub fn normalize_with(input: &str, options: &Options) -> String {
    block::serialize(&blocks(input, options))
}

/// The blocks `normalize_with` would serialize.
pub fn blocks(input: &str, options: &Options) -> Vec<Block> {
    let input = classify(input);
    let blocks = match input {
        Input::PlainText(text) => plain::blocks(text, options),
        Input::Markup(html) => fragment::blocks(html),
    };
    tracing::debug!(
        markup = matches!(input, Input::Markup(_)),
        blocks = blocks.len(),
        "normalized"
    );
    blocks
}
