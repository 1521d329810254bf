// src/metrics.rs
//
// Counters derived from the raw document and its normalized output. Lengths are
// counted in Unicode scalar values, not bytes.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub characters: usize,
    pub paragraphs: usize,
    pub html_length: usize,
}

impl Metrics {
    pub fn measure(document: &str, output: &str) -> Self {
        Self {
            characters: document.chars().count(),
            paragraphs: paragraph_count(document),
            html_length: output.chars().count(),
        }
    }
}

/// Non-blank lines of the raw document.
pub fn paragraph_count(document: &str) -> usize {
    document
        .split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_raw_and_output() {
        let m = Metrics::measure("ab\n\n中文\n", "<p>ab</p>\n<p>中文</p>");
        assert_eq!(
            m,
            Metrics {
                characters: 7,
                paragraphs: 2,
                html_length: 19,
            }
        );
    }

    #[test]
    fn blank_document_has_no_paragraphs() {
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count(" \r\n\t\n"), 0);
        assert_eq!(Metrics::measure("", ""), Metrics::default());
    }
}
