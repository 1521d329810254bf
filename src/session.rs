// src/session.rs
//
// Editing session state: the document buffer with its caret, the view mode and
// the chrome language. Renderers take a `&Session`; nothing here is global.

use crate::labels::{self, Labels};
use crate::metrics::Metrics;
use crate::paste::PastePayload;
use crate::{normalize_with, Options};
use clap::ValueEnum;

/* ================================ Document =============================== */

/// Raw input buffer. The caret is a byte offset kept on a char boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    buffer: String,
    caret: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding `text` with the caret at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let caret = buffer.len();
        Self { buffer, caret }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Clamp to the buffer and back off to the previous char boundary.
    pub fn set_caret(&mut self, pos: usize) {
        let mut pos = pos.min(self.buffer.len());
        while !self.buffer.is_char_boundary(pos) {
            pos -= 1;
        }
        self.caret = pos;
    }

    /// Insert at the caret and move the caret past the insertion.
    pub fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.caret, text);
        self.caret += text.len();
    }

    pub fn replace(&mut self, text: impl Into<String>) {
        *self = Self::from_text(text);
    }
}

/* ================================= Modes ================================= */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    /// Live HTML next to the input
    Editor,
    /// Rendered preview page
    Preview,
    /// Generated HTML source
    #[default]
    Code,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &labels::EN,
            Language::Zh => &labels::ZH,
        }
    }
}

/* ================================ Session ================================ */

#[derive(Clone, Debug, Default)]
pub struct Session {
    document: Document,
    view: ViewMode,
    language: Language,
    options: Options,
}

impl Session {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Insert the preferred flavour of a paste at the caret. Returns whether
    /// anything was inserted.
    pub fn paste(&mut self, payload: &PastePayload) -> bool {
        match payload.resolve() {
            Some(text) => {
                self.document.insert(text);
                true
            }
            None => false,
        }
    }

    /// Normalized output for the current buffer; recomputed on every call.
    pub fn output(&self) -> String {
        normalize_with(self.document.as_str(), &self.options)
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::measure(self.document.as_str(), &self.output())
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_moves_caret() {
        let mut doc = Document::from_text("ac");
        doc.set_caret(1);
        doc.insert("b");
        assert_eq!(doc.as_str(), "abc");
        assert_eq!(doc.caret(), 2);
    }

    #[test]
    fn caret_snaps_to_char_boundary() {
        let mut doc = Document::from_text("é");
        doc.set_caret(1);
        assert_eq!(doc.caret(), 0);
        doc.set_caret(99);
        assert_eq!(doc.caret(), 2);
    }

    #[test]
    fn paste_prefers_html_and_inserts_at_caret() {
        let mut session = Session::default();
        session.document_mut().replace("before after");
        session.document_mut().set_caret(7);
        let inserted = session.paste(&PastePayload {
            html: Some("<html><body><b>x</b> </body></html>".into()),
            text: Some("x".into()),
        });
        assert!(inserted);
        assert_eq!(session.document().as_str(), "before <b>x</b>after");
        assert!(!session.paste(&PastePayload::default()));
    }

    #[test]
    fn output_and_metrics_follow_the_buffer() {
        let mut session = Session::default();
        assert_eq!(session.output(), "");
        session.document_mut().insert("# Hi\n\nthere");
        assert_eq!(session.output(), "<p><strong>Hi</strong></p>\n<p>there</p>");
        let m = session.metrics();
        assert_eq!(m.characters, 11);
        assert_eq!(m.paragraphs, 2);
        assert_eq!(m.html_length, session.output().chars().count());
    }

    #[test]
    fn language_toggles_labels_only() {
        let mut session = Session::default();
        session.document_mut().insert("x");
        let before = session.output();
        session.toggle_language();
        assert_eq!(session.language(), Language::Zh);
        assert_eq!(session.labels().lang_code, "zh");
        assert_eq!(session.output(), before);
        session.toggle_language();
        assert_eq!(session.labels().lang_code, "en");
    }

    #[test]
    fn verbatim_option_reaches_output() {
        let mut session = Session::new(Options { escape_text: false });
        session.document_mut().insert("a<3");
        assert_eq!(session.output(), "<p>a<3</p>");
    }
}
