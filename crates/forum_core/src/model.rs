use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Member {
    pub username: String,
    /// Profile path, e.g. `/member/alice`.
    pub href: String,
    #[serde(default)]
    pub avatar_src: String,
}

impl Member {
    pub fn new(username: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            href: href.into(),
            avatar_src: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Short name used in `/go/{name}`; empty when only the path is known.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub member: Option<Member>,
    #[serde(default)]
    pub node: Option<Node>,
    #[serde(default)]
    pub reply_count: u32,
    #[serde(default)]
    pub last_reply: Option<String>,
    /// Already opened by this reader.
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comment {
    pub member: Member,
    pub floor: String,
    #[serde(default)]
    pub published: String,
    /// Raw HTML snippet as served by the forum.
    pub content_html: String,
}
