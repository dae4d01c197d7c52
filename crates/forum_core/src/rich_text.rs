use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanStyle {
    Link { href: String },
    Image { src: String },
    Code,
}

/// Styled range over [`RichText::text`], in `char` offsets, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

/// Display text for a comment body plus its styled ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RichText {
    pub text: String,
    pub spans: Vec<TextSpan>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// The href under a character offset, i.e. what a tap at that offset follows.
    pub fn link_at(&self, offset: usize) -> Option<&str> {
        self.spans
            .iter()
            .filter(|span| span.start <= offset && offset < span.end)
            .find_map(|span| match &span.style {
                SpanStyle::Link { href } => Some(href.as_str()),
                _ => None,
            })
    }

    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().filter_map(|span| match &span.style {
            SpanStyle::Link { href } => Some(href.as_str()),
            _ => None,
        })
    }

    /// Text covered by a span.
    pub fn span_text(&self, span: &TextSpan) -> String {
        self.text
            .chars()
            .skip(span.start)
            .take(span.end.saturating_sub(span.start))
            .collect()
    }
}
