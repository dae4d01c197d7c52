use crate::{Comment, RichText, Topic};

/// Suffix appended to a reply's floor number.
pub const FLOOR_SUFFIX: &str = " 楼";

/// Title opacity for topics the reader has already opened.
pub const READ_TITLE_ALPHA: f32 = 0.4;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderViewModel {
    pub topics: Vec<TopicRowView>,
    pub comments: Vec<CommentRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRowView {
    pub title: String,
    pub username: Option<String>,
    pub avatar_src: Option<String>,
    pub node_label: String,
    pub show_node: bool,
    pub reply_count: u32,
    pub last_reply: Option<String>,
    pub title_dimmed: bool,
}

impl TopicRowView {
    pub fn from_topic(topic: &Topic) -> Self {
        let node_label = topic
            .node
            .as_ref()
            .and_then(|node| node.title.clone())
            .unwrap_or_default();
        Self {
            title: topic.title.clone(),
            username: topic.member.as_ref().map(|m| m.username.clone()),
            avatar_src: topic.member.as_ref().map(|m| m.avatar_src.clone()),
            show_node: !node_label.is_empty(),
            node_label,
            reply_count: topic.reply_count,
            last_reply: topic.last_reply.clone(),
            title_dimmed: topic.is_read,
        }
    }

    /// Opacity to draw the title with, under any theme.
    pub fn title_alpha(&self) -> f32 {
        if self.title_dimmed {
            READ_TITLE_ALPHA
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRowView {
    pub username: String,
    pub avatar_src: String,
    pub floor_label: String,
    pub published: String,
    /// Author is the topic's original poster.
    pub is_host: bool,
    pub body: RichText,
}

impl CommentRowView {
    /// A missing host username compares as `""`.
    pub fn from_comment(comment: &Comment, host_username: Option<&str>, body: RichText) -> Self {
        Self {
            username: comment.member.username.clone(),
            avatar_src: comment.member.avatar_src.clone(),
            floor_label: format!("{}{}", comment.floor, FLOOR_SUFFIX),
            published: comment.published.clone(),
            is_host: host_username.unwrap_or("") == comment.member.username,
            body,
        }
    }
}
