#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A topic list page arrived.
    TopicsLoaded(Vec<crate::Topic>),
    /// A topic's replies arrived, already rendered for display.
    CommentsLoaded {
        host_username: Option<String>,
        comments: Vec<crate::CommentEntry>,
    },
    /// User tapped the author avatar on a topic row.
    TopicAvatarTapped { row: usize },
    /// User tapped the node label on a topic row.
    TopicNodeTapped { row: usize },
    /// User tapped the author avatar on a comment row.
    CommentAvatarTapped { row: usize },
    /// User tapped inside a comment body at a character offset.
    CommentTextTapped { row: usize, offset: usize },
    /// A rich-text surface reported a followed link.
    LinkActivated(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
