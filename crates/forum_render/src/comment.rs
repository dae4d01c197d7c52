use ego_tree::NodeRef;
use forum_core::{Comment, CommentEntry, RichText, SpanStyle, TextSpan};
use forum_logging::{forum_debug, forum_trace, forum_warn};
use scraper::node::Node;
use scraper::{ElementRef, Html};

const DEFAULT_MAX_SPANS: usize = 5_000;

/// Stand-in character for inline images, as rich-text attachments use.
pub const IMAGE_PLACEHOLDER: char = '\u{FFFC}';

pub trait Renderer: Send + Sync {
    fn render(&self, html: &str) -> RichText;
}

/// Turns a comment's HTML snippet into display text with link, image and code spans.
///
/// Anchor hrefs are kept as written. Relative forum paths such as
/// `/member/alice` must reach the link classifier unresolved, otherwise they
/// would be classified as web pages.
pub struct CommentRenderer {
    max_spans: usize,
}

impl CommentRenderer {
    pub fn new() -> Self {
        Self::with_max_spans(DEFAULT_MAX_SPANS)
    }

    pub fn with_max_spans(max_spans: usize) -> Self {
        Self { max_spans }
    }

    /// Renders a reply and pairs it with its body, ready for the reader state.
    pub fn render_entry(&self, comment: Comment) -> CommentEntry {
        let body = self.render(&comment.content_html);
        CommentEntry { comment, body }
    }

    fn visit_node(&self, node: NodeRef<'_, Node>, ctx: &mut RenderContext) {
        match node.value() {
            Node::Text(text) => ctx.append_text(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.visit_element(element, ctx);
                }
            }
            _ => {
                for child in node.children() {
                    self.visit_node(child, ctx);
                }
            }
        }
    }

    fn visit_element(&self, element: ElementRef, ctx: &mut RenderContext) {
        let tag = element.value().name().to_ascii_lowercase();
        match tag.as_str() {
            "a" => self.handle_anchor(element, ctx),
            "img" => self.handle_image(element, ctx),
            "br" => ctx.ensure_newline(),
            "li" => {
                ctx.ensure_newline();
                ctx.append_text("• ");
                self.visit_children(element, ctx);
                ctx.ensure_newline();
            }
            "pre" => {
                ctx.ensure_newline();
                ctx.preformatted += 1;
                let start = ctx.char_len;
                self.visit_children(element, ctx);
                ctx.preformatted -= 1;
                ctx.add_span(start, SpanStyle::Code);
                ctx.ensure_newline();
            }
            "code" => {
                let start = ctx.char_len;
                self.visit_children(element, ctx);
                if ctx.preformatted == 0 {
                    ctx.add_span(start, SpanStyle::Code);
                }
            }
            "p" | "div" | "blockquote" | "ul" | "ol" | "table" | "tr" | "h1" | "h2" | "h3"
            | "h4" | "h5" | "h6" | "hr" => {
                ctx.ensure_newline();
                self.visit_children(element, ctx);
                ctx.ensure_newline();
            }
            "script" | "style" | "noscript" | "iframe" | "template" => {}
            _ => self.visit_children(element, ctx),
        }
    }

    fn visit_children(&self, element: ElementRef, ctx: &mut RenderContext) {
        for child in element.children() {
            self.visit_node(child, ctx);
        }
    }

    fn handle_anchor(&self, element: ElementRef, ctx: &mut RenderContext) {
        let start = ctx.char_len;
        self.visit_children(element, ctx);
        if let Some(href) = element.value().attr("href").and_then(followable_href) {
            ctx.add_span(
                start,
                SpanStyle::Link {
                    href: href.to_string(),
                },
            );
        }
    }

    fn handle_image(&self, element: ElementRef, ctx: &mut RenderContext) {
        if let Some(src) = element.value().attr("src").map(str::trim) {
            if src.is_empty() {
                return;
            }
            let start = ctx.char_len;
            ctx.push_char(IMAGE_PLACEHOLDER);
            ctx.add_span(
                start,
                SpanStyle::Image {
                    src: src.to_string(),
                },
            );
        }
    }
}

impl Renderer for CommentRenderer {
    fn render(&self, html: &str) -> RichText {
        if html.trim().is_empty() {
            forum_debug!("empty comment body");
            return RichText::default();
        }

        let fragment = Html::parse_fragment(html);
        let mut ctx = RenderContext::new(self.max_spans);
        for child in fragment.root_element().children() {
            self.visit_node(child, &mut ctx);
        }
        ctx.into_output()
    }
}

impl Default for CommentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn followable_href(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('#') || lower.starts_with('?') || lower.starts_with("javascript:") {
        return None;
    }
    Some(trimmed)
}

struct RenderContext {
    builder: String,
    char_len: usize,
    spans: Vec<TextSpan>,
    max_spans: usize,
    limit_logged: bool,
    preformatted: usize,
    last_char: Option<char>,
}

impl RenderContext {
    fn new(max_spans: usize) -> Self {
        Self {
            builder: String::new(),
            char_len: 0,
            spans: Vec::new(),
            max_spans,
            limit_logged: false,
            preformatted: 0,
            last_char: None,
        }
    }

    fn into_output(mut self) -> RichText {
        while matches!(self.last_char, Some(' ') | Some('\n')) {
            self.pop_char();
        }
        RichText {
            text: self.builder,
            spans: self.spans,
        }
    }

    fn append_text(&mut self, text: &str) {
        if self.preformatted > 0 {
            for ch in text.chars() {
                self.push_char(ch);
            }
            return;
        }
        for ch in text.chars() {
            if ch.is_whitespace() {
                if matches!(self.last_char, None | Some(' ') | Some('\n')) {
                    continue;
                }
                self.push_char(' ');
            } else {
                self.push_char(ch);
            }
        }
    }

    fn ensure_newline(&mut self) {
        if self.last_char == Some(' ') {
            self.pop_char();
        }
        if self.last_char == Some('\n') || self.builder.is_empty() {
            return;
        }
        self.push_char('\n');
    }

    fn push_char(&mut self, ch: char) {
        self.builder.push(ch);
        self.char_len += 1;
        self.last_char = Some(ch);
    }

    fn pop_char(&mut self) {
        if self.builder.pop().is_none() {
            return;
        }
        self.char_len -= 1;
        self.last_char = self.builder.chars().next_back();
        for span in self.spans.iter_mut().rev() {
            if span.end <= self.char_len {
                break;
            }
            span.end = self.char_len;
        }
        self.spans.retain(|span| span.start < span.end);
    }

    fn add_span(&mut self, start: usize, style: SpanStyle) {
        let end = self.char_len;
        if start >= end {
            forum_trace!("dropping empty span {:?}", style);
            return;
        }
        if self.spans.len() >= self.max_spans {
            if !self.limit_logged {
                forum_warn!("span limit {} reached; further styling dropped", self.max_spans);
                self.limit_logged = true;
            }
            return;
        }
        self.spans.push(TextSpan { start, end, style });
    }
}
