use crate::view_model::{CommentRowView, ReaderViewModel, TopicRowView};
use crate::{Comment, Member, Node, RichText, Topic};

/// A reply paired with its rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub comment: Comment,
    pub body: RichText,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderState {
    topics: Vec<Topic>,
    host_username: Option<String>,
    comments: Vec<CommentEntry>,
    dirty: bool,
}

impl ReaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ReaderViewModel {
        let host = self.host_username.as_deref();
        ReaderViewModel {
            topics: self.topics.iter().map(TopicRowView::from_topic).collect(),
            comments: self
                .comments
                .iter()
                .map(|entry| CommentRowView::from_comment(&entry.comment, host, entry.body.clone()))
                .collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_topics(&mut self, topics: Vec<Topic>) {
        self.topics = topics;
        self.dirty = true;
    }

    pub(crate) fn set_comments(&mut self, host_username: Option<String>, comments: Vec<CommentEntry>) {
        self.host_username = host_username;
        self.comments = comments;
        self.dirty = true;
    }

    pub(crate) fn topic_member(&self, row: usize) -> Option<&Member> {
        self.topics.get(row)?.member.as_ref()
    }

    pub(crate) fn topic_node(&self, row: usize) -> Option<&Node> {
        self.topics.get(row)?.node.as_ref()
    }

    pub(crate) fn comment_member(&self, row: usize) -> Option<&Member> {
        self.comments.get(row).map(|entry| &entry.comment.member)
    }

    pub(crate) fn comment_body(&self, row: usize) -> Option<&RichText> {
        self.comments.get(row).map(|entry| &entry.body)
    }
}
