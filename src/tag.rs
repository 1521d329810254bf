// src/tag.rs
//
// Byte-level tag scanning shared by the fragment parser and the paste boundary.
//
// - Tag ends are found quote-aware, so `>` inside attribute values never ends a tag.
// - Tag names are ASCII; sets below are matched case-insensitively.
// - Nothing here allocates except the lowercase name handed to the tree builder.

use memchr::memchr;

/* =============================== Core sets =============================== */

fn matches_ignore_ascii_case(name: &[u8], set: &[&[u8]]) -> bool {
    set.iter().any(|&s| name.eq_ignore_ascii_case(s))
}

pub fn is_void(name: &[u8]) -> bool {
    matches_ignore_ascii_case(
        name,
        &[
            b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
            b"param", b"source", b"track", b"wbr",
        ],
    )
}

/// Elements whose content is raw text up to the matching end tag.
pub fn is_raw_text(name: &[u8]) -> bool {
    matches_ignore_ascii_case(
        name,
        &[b"script", b"style", b"textarea", b"title", b"xmp", b"noscript", b"template"],
    )
}

/// Start tags that implicitly close an open `<p>`.
pub fn closes_paragraph(name: &[u8]) -> bool {
    matches_ignore_ascii_case(
        name,
        &[
            b"address", b"article", b"aside", b"blockquote", b"details", b"dialog", b"div",
            b"dl", b"fieldset", b"figcaption", b"figure", b"footer", b"form", b"h1", b"h2",
            b"h3", b"h4", b"h5", b"h6", b"header", b"hgroup", b"hr", b"main", b"menu", b"nav",
            b"ol", b"p", b"pre", b"search", b"section", b"table", b"ul",
        ],
    )
}

pub fn is_heading(name: &[u8]) -> bool {
    matches_ignore_ascii_case(name, &[b"h1", b"h2", b"h3", b"h4", b"h5", b"h6"])
}

/// How the top-level walk treats an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Paragraph,
    Heading,
    Container,
    /// Metadata and scripting; contributes nothing.
    Ignored,
    Other,
}

pub fn role(name: &[u8]) -> Role {
    if name.eq_ignore_ascii_case(b"p") {
        Role::Paragraph
    } else if is_heading(name) {
        Role::Heading
    } else if matches_ignore_ascii_case(
        name,
        &[
            b"div", b"section", b"article", b"main", b"header", b"footer", b"aside", b"nav",
            b"body", b"html",
        ],
    ) {
        Role::Container
    } else if matches_ignore_ascii_case(
        name,
        &[
            b"head", b"script", b"style", b"template", b"title", b"meta", b"link", b"noscript",
            b"base",
        ],
    ) {
        Role::Ignored
    } else {
        Role::Other
    }
}

pub fn is_bold(name: &[u8]) -> bool {
    matches_ignore_ascii_case(name, &[b"b", b"strong"])
}

/* ============================ Utility predicates ========================= */

#[inline]
pub fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[inline]
pub fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' || b == b'\x0c'
}

/// Does a start or end tag begin at `i`? (`<` + letter, or `</` + letter)
pub fn opens_tag(s: &[u8], i: usize) -> bool {
    match s.get(i + 1) {
        Some(b) if b.is_ascii_alphabetic() => true,
        Some(b'/') => s.get(i + 2).is_some_and(u8::is_ascii_alphabetic),
        _ => false,
    }
}

/* =============================== Tag parsing ============================= */

#[derive(Clone, Copy, Debug)]
pub struct TagInfo<'a> {
    pub name: &'a [u8],
    pub is_end: bool,
}

impl TagInfo<'_> {
    pub fn lower_name(&self) -> String {
        String::from_utf8_lossy(self.name).to_ascii_lowercase()
    }
}

/// Find the '>' for a tag starting at `i` (s[i] == '<'), being quote-aware.
pub fn find_tag_end(s: &[u8], mut i: usize) -> Option<usize> {
    let n = s.len();
    i += 1;
    let mut quote: u8 = 0;
    while i < n {
        let b = s[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Extract tag name and end flag from raw `<...>` bytes.
pub fn parse_tag_info(tag: &[u8]) -> TagInfo<'_> {
    let n = tag.len();
    let mut i = 1;

    let mut is_end = false;
    if i < n && tag[i] == b'/' {
        is_end = true;
        i += 1;
    }
    while i < n && is_ws(tag[i]) {
        i += 1;
    }
    let start = i;
    while i < n && is_name_char(tag[i]) {
        i += 1;
    }
    let name = &tag[start..i];

    TagInfo { name, is_end }
}

/// Case-insensitive search for an ASCII `needle` in `hay`, starting at `from`.
pub fn find_ignore_ascii_case(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    let first = needle.first()?;
    let mut k = from;
    while k + needle.len() <= hay.len() {
        let lower = memchr(first.to_ascii_lowercase(), &hay[k..]);
        let upper = memchr(first.to_ascii_uppercase(), &hay[k..]);
        let off = match (lower, upper) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return None,
        };
        let at = k + off;
        if at + needle.len() <= hay.len() && hay[at..at + needle.len()].eq_ignore_ascii_case(needle) {
            return Some(at);
        }
        k = at + 1;
    }
    None
}

/// Locate the end tag `</name ...>` closing a raw-text element whose content starts at `i`.
/// Returns (content_end, index_after_end_tag); unterminated content runs to EOF.
pub fn find_raw_text_end(src: &[u8], i: usize, name: &[u8]) -> (usize, usize) {
    let n = src.len();
    let mut j = i;
    while let Some(off) = memchr(b'<', &src[j..]) {
        let pos = j + off;
        if src.get(pos + 1) == Some(&b'/') {
            let name_end = pos + 2 + name.len();
            let name_matches = name_end <= n && src[pos + 2..name_end].eq_ignore_ascii_case(name);
            let boundary = src.get(name_end).map_or(true, |&b| is_ws(b) || b == b'>' || b == b'/');
            if name_matches && boundary {
                let after = find_tag_end(src, pos).map_or(n, |end| end + 1);
                return (pos, after);
            }
        }
        j = pos + 1;
    }
    (n, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_end_skips_quoted_gt() {
        let s = br#"<a title="x > y">z"#;
        assert_eq!(find_tag_end(s, 0), Some(16));
    }

    #[test]
    fn parses_end_tags_and_names() {
        let ti = parse_tag_info(b"</P >");
        assert!(ti.is_end);
        assert_eq!(ti.name, b"P");

        let ti = parse_tag_info(b"<br/>");
        assert!(!ti.is_end);
        assert_eq!(ti.lower_name(), "br");

        let ti = parse_tag_info(b"<a href=/x/>");
        assert_eq!(ti.name, b"a");
    }

    #[test]
    fn opens_tag_requires_letter() {
        assert!(opens_tag(b"<p>", 0));
        assert!(opens_tag(b"</p>", 0));
        assert!(!opens_tag(b"<3", 0));
        assert!(!opens_tag(b"< p>", 0));
        assert!(!opens_tag(b"<", 0));
    }

    #[test]
    fn raw_text_end_is_case_insensitive() {
        let s = b"<script>if (a </b) {}</SCRIPT >tail";
        let (content_end, after) = find_raw_text_end(s, 8, b"script");
        assert_eq!(&s[8..content_end], b"if (a </b) {}");
        assert_eq!(&s[after..], b"tail");
    }

    #[test]
    fn raw_text_without_end_runs_to_eof() {
        let s = b"<style>p{}";
        assert_eq!(find_raw_text_end(s, 7, b"style"), (10, 10));
    }

    #[test]
    fn finds_needle_regardless_of_case() {
        assert_eq!(find_ignore_ascii_case(b"<HTML><Body>", b"<body", 0), Some(6));
        assert_eq!(find_ignore_ascii_case(b"<p>", b"<body", 0), None);
    }

    #[test]
    fn roles() {
        assert_eq!(role(b"P"), Role::Paragraph);
        assert_eq!(role(b"h3"), Role::Heading);
        assert_eq!(role(b"section"), Role::Container);
        assert_eq!(role(b"style"), Role::Ignored);
        assert_eq!(role(b"span"), Role::Other);
    }
}
