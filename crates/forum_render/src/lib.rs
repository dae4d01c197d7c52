//! Forum render: comment HTML to display text with tappable link spans.
mod comment;

pub use comment::{CommentRenderer, Renderer, IMAGE_PLACEHOLDER};
