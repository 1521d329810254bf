// src/classify.rs
//
// Input classification: markup is assumed iff some '<' is directly followed by an
// ASCII letter and a '>' appears anywhere after it. Everything else is plain text.

use memchr::memchr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
    PlainText(&'a str),
    Markup(&'a str),
}

pub fn classify(input: &str) -> Input<'_> {
    if looks_like_markup(input.as_bytes()) {
        Input::Markup(input)
    } else {
        Input::PlainText(input)
    }
}

fn looks_like_markup(s: &[u8]) -> bool {
    let mut i = 0usize;
    while let Some(off) = memchr(b'<', &s[i..]) {
        let lt = i + off;
        if s.get(lt + 1).is_some_and(u8::is_ascii_alphabetic) {
            // Later candidates start after this one, so one '>' check settles it.
            return memchr(b'>', &s[lt + 2..]).is_some();
        }
        i = lt + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_markup() {
        assert_eq!(classify("<p>x</p>"), Input::Markup("<p>x</p>"));
        assert!(matches!(classify("text <b>bold</b>"), Input::Markup(_)));
        assert!(matches!(classify("<a>"), Input::Markup(_)));
        assert!(matches!(classify("see <x\n\n> later"), Input::Markup(_)));
    }

    #[test]
    fn look_alikes_are_plain() {
        for s in ["", "I <3 Rust", "a < b > c", "1<2", "<b", "</p>", "x <3 <y"] {
            assert_eq!(classify(s), Input::PlainText(s), "{s:?}");
        }
    }
}
