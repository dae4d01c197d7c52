//! Followed-link classification.
//!
//! A link reported by a rich-text surface is either an absolute web URL or an
//! in-app path. Classification walks [`RULES`] top to bottom and the first
//! matching rule builds the [`NavigationAction`].
//!
//! The `/member/`, `/t/` and `/go/` rules match by substring, not by path
//! segment, so `/x/member/y/z` still opens member `z`. This tolerates
//! proxy-prefixed paths and also admits false positives; it is kept as-is.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::NavigationAction;

/// A link split into the pieces the rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub link: &'a str,
    pub path: Cow<'a, str>,
}

impl<'a> LinkParts<'a> {
    pub fn new(link: &'a str) -> Self {
        Self {
            link,
            path: path_component(link),
        }
    }
}

/// One entry of the ordered rule table.
pub struct LinkRule {
    name: &'static str,
    matches: fn(&LinkParts<'_>) -> bool,
    build: fn(&LinkParts<'_>) -> NavigationAction,
}

impl LinkRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies this rule alone, ignoring priority.
    pub fn apply(&self, parts: &LinkParts<'_>) -> Option<NavigationAction> {
        (self.matches)(parts).then(|| (self.build)(parts))
    }
}

/// Rules in priority order. Web links win over every in-app pattern.
pub static RULES: &[LinkRule] = &[
    LinkRule {
        name: "web_page",
        matches: |p| p.link.starts_with("http://") || p.link.starts_with("https://"),
        build: |p| NavigationAction::OpenWebPage {
            url: p.link.to_string(),
        },
    },
    LinkRule {
        name: "member",
        matches: |p| p.path.contains("/member/"),
        build: |p| NavigationAction::OpenMember {
            username: member_username(&p.path).to_string(),
            path: p.path.to_string(),
        },
    },
    LinkRule {
        name: "topic",
        matches: |p| p.path.contains("/t/"),
        build: |p| NavigationAction::OpenTopic {
            path: p.path.to_string(),
        },
    },
    LinkRule {
        name: "node",
        matches: |p| p.path.contains("/go/"),
        build: |p| NavigationAction::OpenNode {
            name: String::new(),
            path: p.path.to_string(),
        },
    },
];

/// Classifies a followed link. Total and pure: unknown input yields
/// [`NavigationAction::Unhandled`].
pub fn classify(link: &str) -> NavigationAction {
    let parts = LinkParts::new(link);
    RULES
        .iter()
        .find_map(|rule| rule.apply(&parts))
        .unwrap_or(NavigationAction::Unhandled)
}

/// Percent-decoded path of a link.
///
/// Absolute URLs with a hierarchical path (including the opaque-host form a
/// rich-text view reports for relative anchors) yield the URL path. Anything
/// else is treated as a path already, minus any query or fragment. Either way
/// the same member link decodes to the same text.
pub fn path_component(link: &str) -> Cow<'_, str> {
    match Url::parse(link) {
        Ok(url) if !url.cannot_be_a_base() => {
            Cow::Owned(percent_decode_str(url.path()).decode_utf8_lossy().into_owned())
        }
        _ => {
            let end = link.find(['?', '#']).unwrap_or(link.len());
            percent_decode_str(&link[..end]).decode_utf8_lossy()
        }
    }
}

/// Final segment of a member path, ignoring one trailing `/`.
///
/// A bare `/member/` has no name and yields `""`.
fn member_username(path: &str) -> &str {
    if path.ends_with("/member/") {
        return "";
    }
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed.rsplit('/').next().unwrap_or("")
}
