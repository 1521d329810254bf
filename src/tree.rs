// src/tree.rs
//
// Lenient HTML fragment parser.
//
// - Never fails: an unterminated tag is text, a stray end tag is dropped, and
//   elements left open at EOF are closed there.
// - Comments, doctype and processing instructions are dropped.
// - Void elements never take children; `/>` is ignored on everything else.
// - At most MAX_DEPTH elements are open at once; deeper start tags are dropped and
//   their content lands in the deepest open element.
// - Block-level start tags close an open <p>; a heading start closes an open heading.
// - Raw-text elements (script, style, ...) keep their content as a single text node.
// - Text is kept as source text: character references are not decoded.

use crate::tag::{
    closes_paragraph, find_raw_text_end, find_tag_end, is_heading, is_raw_text, is_void,
    opens_tag, parse_tag_info, TagInfo,
};
use memchr::{memchr, memmem};

/// Open-element limit, counting the fragment root.
pub const MAX_DEPTH: usize = 512;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name; empty for the fragment root.
    pub name: String,
    pub children: Vec<Node>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/* ============================= Open-element stack ========================= */

struct Builder {
    // stack[0] is the fragment root and is never popped.
    stack: Vec<Element>,
}

impl Builder {
    fn new() -> Self {
        Self {
            stack: vec![Element::default()],
        }
    }

    fn current(&mut self) -> &mut Element {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn text(&mut self, bytes: &[u8]) {
        self.current().push_text(&String::from_utf8_lossy(bytes));
    }

    fn pop(&mut self) {
        if self.stack.len() > 1 {
            if let Some(done) = self.stack.pop() {
                self.current().children.push(Node::Element(done));
            }
        }
    }

    /// Pop up to and including the nearest open element matching `pred`, if any.
    fn close_where(&mut self, pred: impl Fn(&str) -> bool) -> bool {
        let Some(depth) = self.stack.iter().skip(1).rposition(|el| pred(&el.name)) else {
            return false;
        };
        // rposition over skip(1) is relative to index 1
        let target = depth + 1;
        while self.stack.len() > target {
            self.pop();
        }
        true
    }

    /// Returns whether the element was left open.
    fn start(&mut self, ti: TagInfo<'_>) -> bool {
        if closes_paragraph(ti.name) {
            self.close_where(|name| name == "p");
        }
        if is_heading(ti.name)
            && self
                .stack
                .last()
                .is_some_and(|el| is_heading(el.name.as_bytes()))
        {
            self.pop();
        }

        let el = Element::new(ti.lower_name());
        if is_void(ti.name) {
            self.current().children.push(Node::Element(el));
            false
        } else if self.stack.len() >= MAX_DEPTH {
            false
        } else {
            self.stack.push(el);
            true
        }
    }

    fn end(&mut self, ti: TagInfo<'_>) {
        if is_heading(ti.name) {
            self.close_where(|name| is_heading(name.as_bytes()));
        } else {
            let name = ti.lower_name();
            self.close_where(|open| open == name);
        }
    }

    fn finish(mut self) -> Element {
        while self.stack.len() > 1 {
            self.pop();
        }
        self.stack.pop().unwrap_or_default()
    }
}

/* ================================ Parsing ================================ */

/// Parse `input` as an HTML fragment. The returned element is the unnamed root.
pub fn parse_fragment(input: &str) -> Element {
    let src = input.as_bytes();
    let n = src.len();
    let mut b = Builder::new();
    let mut i = 0usize;

    while i < n {
        // Comments
        if src[i..].starts_with(b"<!--") {
            // From i + 2 so `<!-->` and `<!--->` end themselves.
            match memmem::find(&src[i + 2..], b"-->") {
                Some(off) => i = i + 2 + off + 3,
                None => break,
            }
            continue;
        }

        // Doctype, CDATA, processing instructions: skip to '>'
        if src[i] == b'<' && matches!(src.get(i + 1), Some(b'!') | Some(b'?')) {
            match memchr(b'>', &src[i..]) {
                Some(off) => i += off + 1,
                None => break,
            }
            continue;
        }

        // Tags
        if src[i] == b'<' && opens_tag(src, i) {
            let Some(j) = find_tag_end(src, i) else {
                // Unterminated tag to EOF; treat literally
                b.text(&src[i..]);
                break;
            };
            let ti = parse_tag_info(&src[i..=j]);
            i = j + 1;

            if ti.is_end {
                b.end(ti);
                continue;
            }

            let opened = b.start(ti);
            if is_raw_text(ti.name) {
                let (content_end, after) = find_raw_text_end(src, i, ti.name);
                if opened {
                    b.text(&src[i..content_end]);
                    b.pop();
                }
                i = after;
            }
            continue;
        }

        // Text run; a '<' that opens nothing is literal text
        let from = if src[i] == b'<' { i + 1 } else { i };
        let next_lt = memchr(b'<', &src[from..]).map_or(n, |off| from + off);
        b.text(&src[i..next_lt]);
        i = next_lt;
    }

    b.finish()
}
