//! Forum core: link classification, row view models and the pure tap-routing state machine.
mod action;
mod classify;
mod effect;
mod model;
mod msg;
mod rich_text;
mod state;
mod update;
mod view_model;

pub use action::NavigationAction;
pub use classify::{classify, path_component, LinkParts, LinkRule, RULES};
pub use effect::Effect;
pub use model::{Comment, Member, Node, Topic};
pub use msg::Msg;
pub use rich_text::{RichText, SpanStyle, TextSpan};
pub use state::{CommentEntry, ReaderState};
pub use update::update;
pub use view_model::{
    CommentRowView, ReaderViewModel, TopicRowView, FLOOR_SUFFIX, READ_TITLE_ALPHA,
};
