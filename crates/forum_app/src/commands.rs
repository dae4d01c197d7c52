use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use forum_core::{
    classify, update, Comment, Msg, NavigationAction, ReaderState, RichText, SpanStyle,
};
use forum_logging::forum_info;
use forum_render::{CommentRenderer, Renderer};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::navigation::{EffectRunner, PrintNavigator};

/// A topic's replies as served to the reader, one JSON document per thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadFile {
    #[serde(default)]
    pub host_username: Option<String>,
    pub comments: Vec<Comment>,
}

/// A simulated tap on a rendered thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Avatar { row: usize },
    Text { row: usize, offset: usize },
}

impl Tap {
    /// Parses `avatar:ROW` or `text:ROW:OFFSET`.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        match parts.as_slice() {
            ["avatar", row] => Ok(Tap::Avatar {
                row: row.parse().with_context(|| format!("bad row in tap {raw:?}"))?,
            }),
            ["text", row, offset] => Ok(Tap::Text {
                row: row.parse().with_context(|| format!("bad row in tap {raw:?}"))?,
                offset: offset
                    .parse()
                    .with_context(|| format!("bad offset in tap {raw:?}"))?,
            }),
            _ => bail!("tap must be avatar:ROW or text:ROW:OFFSET, got {raw:?}"),
        }
    }

    fn into_msg(self) -> Msg {
        match self {
            Tap::Avatar { row } => Msg::CommentAvatarTapped { row },
            Tap::Text { row, offset } => Msg::CommentTextTapped { row, offset },
        }
    }
}

#[derive(Serialize)]
struct ClassifiedLink<'a> {
    link: &'a str,
    action: NavigationAction,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    #[serde(flatten)]
    body: &'a RichText,
    links: Vec<ClassifiedLink<'a>>,
}

pub fn classify_links(links: &[String], json: bool, out: &mut dyn Write) -> Result<()> {
    let classified: Vec<_> = links
        .iter()
        .map(|link| ClassifiedLink {
            link,
            action: classify(link),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &classified)?;
        writeln!(out)?;
        return Ok(());
    }
    for entry in &classified {
        writeln!(out, "{}\t{}", entry.link, describe(&entry.action))?;
    }
    Ok(())
}

pub fn render_file(path: &Path, config: &AppConfig, json: bool, out: &mut dyn Write) -> Result<()> {
    let html = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    let body = CommentRenderer::with_max_spans(config.max_spans_per_comment).render(&html);
    forum_info!("Rendered {:?} spans={}", path, body.spans.len());

    let links: Vec<_> = body
        .links()
        .map(|link| ClassifiedLink {
            link,
            action: classify(link),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &RenderReport { body: &body, links })?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", body.text)?;
    for span in &body.spans {
        let label = match &span.style {
            SpanStyle::Link { href } => format!("link {href} -> {}", describe(&classify(href))),
            SpanStyle::Image { src } => format!("image {src}"),
            SpanStyle::Code => "code".to_string(),
        };
        writeln!(out, "[{}..{}] {:?} {}", span.start, span.end, body.span_text(span), label)?;
    }
    Ok(())
}

pub fn show_thread(
    path: &Path,
    config: &AppConfig,
    taps: &[Tap],
    out: &mut dyn Write,
) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    let thread: ThreadFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing thread {path:?}"))?;

    let renderer = CommentRenderer::with_max_spans(config.max_spans_per_comment);
    let comments = thread
        .comments
        .into_iter()
        .map(|comment| renderer.render_entry(comment))
        .collect();
    let (mut state, _) = update(
        ReaderState::new(),
        Msg::CommentsLoaded {
            host_username: thread.host_username,
            comments,
        },
    );

    for row in state.view().comments {
        let host = if row.is_host { " [OP]" } else { "" };
        writeln!(out, "{} {}{} {}", row.floor_label, row.username, host, row.published)?;
        for line in row.body.text.lines() {
            writeln!(out, "    {line}")?;
        }
    }

    let site = config.site()?;
    for tap in taps {
        let (next, effects) = update(state, tap.into_msg());
        state = next;
        if effects.is_empty() {
            writeln!(out, "{tap:?}: nothing to open")?;
            continue;
        }
        EffectRunner::new(PrintNavigator::new(site.clone(), &mut *out)).run(effects);
    }
    Ok(())
}

fn describe(action: &NavigationAction) -> String {
    match action {
        NavigationAction::OpenWebPage { url } => format!("web page {url}"),
        NavigationAction::OpenMember { username, path } => format!("member {username:?} at {path}"),
        NavigationAction::OpenTopic { path } => format!("topic {path}"),
        NavigationAction::OpenNode { name, path } if name.is_empty() => format!("node {path}"),
        NavigationAction::OpenNode { name, path } => format!("node {name:?} at {path}"),
        NavigationAction::Unhandled => "unhandled".to_string(),
    }
}
