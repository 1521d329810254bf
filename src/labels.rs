// src/labels.rs
//
// Static label sets for the chrome around the normalizer. Language never changes
// what `normalize` produces.

#[derive(Debug)]
pub struct Labels {
    pub lang_code: &'static str,
    pub copy_success: &'static str,
    pub copy_failure: &'static str,
    pub html_preview: &'static str,
    pub real_time_html: &'static str,
    pub paragraph: &'static str,
    pub paragraphs: &'static str,
    pub characters: &'static str,
    pub paragraph_count: &'static str,
    pub html_length: &'static str,
    pub empty_preview: &'static str,
    pub empty_code: &'static str,
}

pub static EN: Labels = Labels {
    lang_code: "en",
    copy_success: "Copied successfully!",
    copy_failure: "Copy failed",
    html_preview: "HTML Preview Effect",
    real_time_html: "Real-time HTML Output",
    paragraph: "paragraph",
    paragraphs: "paragraphs",
    characters: "Characters",
    paragraph_count: "Paragraphs",
    html_length: "HTML Length",
    empty_preview: "Preview will appear here...",
    empty_code: "<!-- Generated HTML will appear here -->",
};

pub static ZH: Labels = Labels {
    lang_code: "zh",
    copy_success: "复制成功！",
    copy_failure: "复制失败",
    html_preview: "HTML预览效果",
    real_time_html: "实时HTML输出",
    paragraph: "个段落",
    paragraphs: "个段落",
    characters: "字符数",
    paragraph_count: "段落数",
    html_length: "HTML长度",
    empty_preview: "预览将在此处显示...",
    empty_code: "<!-- 生成的HTML将在此处显示 -->",
};

impl Labels {
    /// "1 paragraph", "3 paragraphs"; zero when there is no output at all.
    pub fn paragraph_caption(&self, count: usize, has_output: bool) -> String {
        let count = if has_output { count } else { 0 };
        let noun = if count == 1 { self.paragraph } else { self.paragraphs };
        format!("{count} {noun}")
    }
}
