// src/render.rs
//
// Text renderings of a session: the code pane, the preview page and the status line.
// Empty output is replaced by the language's placeholder.

use crate::labels::Labels;
use crate::session::{Session, ViewMode};

/// Render the pane for the session's current view.
pub fn render_view(session: &Session) -> String {
    match session.view() {
        ViewMode::Code => render_code(session),
        ViewMode::Preview => render_preview(session),
        ViewMode::Editor => render_editor(session),
    }
}

pub fn render_code(session: &Session) -> String {
    let output = session.output();
    if output.is_empty() {
        session.labels().empty_code.to_string()
    } else {
        output
    }
}

/// Code pane under a caption with the live paragraph count.
pub fn render_editor(session: &Session) -> String {
    let labels = session.labels();
    let output = session.output();
    let caption = caption(labels, labels.real_time_html, session, !output.is_empty());
    let body = if output.is_empty() { labels.empty_code.to_string() } else { output };
    format!("{caption}\n{body}")
}

/// A standalone page for a sandboxed viewer. The CSP forbids scripts and remote loads.
pub fn render_preview(session: &Session) -> String {
    let labels = session.labels();
    let output = session.output();
    let body = if output.is_empty() {
        format!("<p><em>{}</em></p>", labels.empty_preview)
    } else {
        output
    };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"Content-Security-Policy\" content=\"default-src 'none'; style-src 'unsafe-inline'\">\n\
         <title>{title}</title>\n\
         <style>body{{max-width:48rem;margin:2rem auto;padding:0 1rem;line-height:1.6;font-family:sans-serif}}</style>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        lang = labels.lang_code,
        title = labels.html_preview,
    )
}

/// "Characters: 12  Paragraphs: 2  HTML Length: 30"
pub fn render_stats(session: &Session) -> String {
    let labels = session.labels();
    let m = session.metrics();
    format!(
        "{}: {}  {}: {}  {}: {}",
        labels.characters,
        m.characters,
        labels.paragraph_count,
        m.paragraphs,
        labels.html_length,
        m.html_length
    )
}

fn caption(labels: &Labels, title: &str, session: &Session, has_output: bool) -> String {
    let count = session.metrics().paragraphs;
    format!("{title} ({})", labels.paragraph_caption(count, has_output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Language;

    fn session(text: &str) -> Session {
        let mut s = Session::default();
        s.document_mut().insert(text);
        s
    }

    #[test]
    fn code_pane_placeholder_when_empty() {
        assert_eq!(render_code(&session("  \n")), "<!-- Generated HTML will appear here -->");
        assert_eq!(render_code(&session("a")), "<p>a</p>");
    }

    #[test]
    fn editor_pane_has_caption() {
        assert_eq!(
            render_editor(&session("a\nb")),
            "Real-time HTML Output (2 paragraphs)\n<p>a</p>\n<p>b</p>"
        );
        let mut s = session("");
        s.set_language(Language::Zh);
        assert_eq!(render_editor(&s), "实时HTML输出 (0 个段落)\n<!-- 生成的HTML将在此处显示 -->");
    }

    #[test]
    fn preview_embeds_output() {
        let page = render_preview(&session("# T"));
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.contains("\n<p><strong>T</strong></p>\n"));
        assert!(page.contains("default-src 'none'"));

        let empty = render_preview(&session(""));
        assert!(empty.contains("<p><em>Preview will appear here...</em></p>"));
    }

    #[test]
    fn view_dispatch() {
        let mut s = session("x");
        s.set_view(ViewMode::Code);
        assert_eq!(render_view(&s), "<p>x</p>");
        s.set_view(ViewMode::Preview);
        assert!(render_view(&s).contains("<title>HTML Preview Effect</title>"));
        s.set_view(ViewMode::Editor);
        assert!(render_view(&s).starts_with("Real-time HTML Output (1 paragraph)"));
    }

    #[test]
    fn stats_line() {
        assert_eq!(
            render_stats(&session("ab\n\ncd")),
            "Characters: 6  Paragraphs: 2  HTML Length: 19"
        );
    }
}
