use forum_logging::{forum_debug, forum_trace};

use crate::{classify, Effect, Member, Msg, NavigationAction, ReaderState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ReaderState, msg: Msg) -> (ReaderState, Vec<Effect>) {
    let action = match msg {
        Msg::TopicsLoaded(topics) => {
            forum_trace!("topics loaded count={}", topics.len());
            state.set_topics(topics);
            None
        }
        Msg::CommentsLoaded {
            host_username,
            comments,
        } => {
            forum_trace!("comments loaded count={}", comments.len());
            state.set_comments(host_username, comments);
            None
        }
        Msg::TopicAvatarTapped { row } => state.topic_member(row).map(open_member),
        Msg::TopicNodeTapped { row } => state.topic_node(row).map(|node| NavigationAction::OpenNode {
            name: node.name.clone(),
            path: node.href.clone(),
        }),
        Msg::CommentAvatarTapped { row } => state.comment_member(row).map(open_member),
        Msg::CommentTextTapped { row, offset } => state
            .comment_body(row)
            .and_then(|body| body.link_at(offset))
            .and_then(route_link),
        Msg::LinkActivated(link) => route_link(&link),
        Msg::NoOp => None,
    };

    let effects = action.map(Effect::Navigate).into_iter().collect();
    (state, effects)
}

/// Classifies a followed link, dropping it when nothing can open it.
fn route_link(link: &str) -> Option<NavigationAction> {
    let action = classify(link);
    if !action.is_handled() {
        forum_debug!("tap ignored: no navigation for link {:?}", link);
        return None;
    }
    Some(action)
}

fn open_member(member: &Member) -> NavigationAction {
    NavigationAction::OpenMember {
        username: member.username.clone(),
        path: member.href.clone(),
    }
}
