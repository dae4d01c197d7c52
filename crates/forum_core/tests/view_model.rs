use forum_core::{
    Comment, CommentRowView, Member, Node, RichText, Topic, TopicRowView, READ_TITLE_ALPHA,
};
use pretty_assertions::assert_eq;

fn comment_by(username: &str) -> Comment {
    Comment {
        member: Member {
            username: username.to_string(),
            href: format!("/member/{username}"),
            avatar_src: "//cdn.example.com/a.png".to_string(),
        },
        floor: "12".to_string(),
        published: "3 分钟前".to_string(),
        content_html: "<p>hi</p>".to_string(),
    }
}

#[test]
fn comment_row_shows_floor_and_host_flag() {
    let row = CommentRowView::from_comment(&comment_by("alice"), Some("alice"), RichText::plain("hi"));

    assert_eq!(row.floor_label, "12 楼");
    assert_eq!(row.username, "alice");
    assert_eq!(row.published, "3 分钟前");
    assert!(row.is_host);
    assert_eq!(row.body.text, "hi");
}

#[test]
fn comment_row_is_not_host_for_other_authors() {
    let row = CommentRowView::from_comment(&comment_by("bob"), Some("alice"), RichText::default());
    assert!(!row.is_host);

    let row = CommentRowView::from_comment(&comment_by("bob"), None, RichText::default());
    assert!(!row.is_host);
}

#[test]
fn missing_host_compares_as_empty_name() {
    let row = CommentRowView::from_comment(&comment_by(""), None, RichText::default());
    assert!(row.is_host);
}

#[test]
fn topic_row_hides_empty_node_label() {
    let mut topic = Topic {
        title: "Hello".to_string(),
        href: "/t/1".to_string(),
        member: Some(Member::new("alice", "/member/alice")),
        node: Some(Node {
            name: "qna".to_string(),
            title: Some(String::new()),
            href: "/go/qna".to_string(),
        }),
        reply_count: 0,
        last_reply: None,
        is_read: false,
    };

    let row = TopicRowView::from_topic(&topic);
    assert!(!row.show_node);
    assert_eq!(row.username.as_deref(), Some("alice"));

    topic.node = None;
    assert!(!TopicRowView::from_topic(&topic).show_node);

    topic.node = Some(Node {
        name: "qna".to_string(),
        title: Some("问与答".to_string()),
        href: "/go/qna".to_string(),
    });
    let row = TopicRowView::from_topic(&topic);
    assert!(row.show_node);
    assert_eq!(row.node_label, "问与答");
}

#[test]
fn comment_deserializes_with_defaults() {
    let comment: Comment = serde_json::from_str(
        r#"{"member":{"username":"a","href":"/member/a"},"floor":"1","content_html":"x"}"#,
    )
    .unwrap();

    assert_eq!(comment.member.avatar_src, "");
    assert_eq!(comment.published, "");
}

#[test]
fn read_topics_have_dimmed_titles() {
    let mut topic: Topic =
        serde_json::from_str(r#"{"title":"Seen before","href":"/t/2"}"#).unwrap();
    assert!(!topic.is_read);

    let row = TopicRowView::from_topic(&topic);
    assert!(!row.title_dimmed);
    assert_eq!(row.title_alpha(), 1.0);

    topic.is_read = true;
    let row = TopicRowView::from_topic(&topic);
    assert!(row.title_dimmed);
    assert_eq!(row.title_alpha(), READ_TITLE_ALPHA);
}
