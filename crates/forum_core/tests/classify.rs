use forum_core::{classify, LinkParts, NavigationAction, RULES};
use pretty_assertions::assert_eq;

fn member(username: &str, path: &str) -> NavigationAction {
    NavigationAction::OpenMember {
        username: username.to_string(),
        path: path.to_string(),
    }
}

#[test]
fn web_links_are_opened_verbatim() {
    for link in [
        "http://example.com",
        "https://www.v2ex.com/t/123?p=1#reply3",
        "https://",
    ] {
        assert_eq!(
            classify(link),
            NavigationAction::OpenWebPage {
                url: link.to_string()
            }
        );
    }
}

#[test]
fn member_path_opens_profile() {
    assert_eq!(classify("/member/alice"), member("alice", "/member/alice"));
}

#[test]
fn topic_path_is_passed_through() {
    assert_eq!(
        classify("/t/98765"),
        NavigationAction::OpenTopic {
            path: "/t/98765".to_string()
        }
    );
}

#[test]
fn node_path_has_empty_name() {
    assert_eq!(
        classify("/go/programming"),
        NavigationAction::OpenNode {
            name: String::new(),
            path: "/go/programming".to_string()
        }
    );
}

#[test]
fn unknown_and_empty_links_are_unhandled() {
    assert_eq!(classify("/unknown/path"), NavigationAction::Unhandled);
    assert_eq!(classify(""), NavigationAction::Unhandled);
    assert_eq!(classify("mailto:someone@example.com"), NavigationAction::Unhandled);
}

#[test]
fn web_links_take_priority_over_member_paths() {
    let link = "https://example.com/member/bob";
    assert_eq!(
        classify(link),
        NavigationAction::OpenWebPage {
            url: link.to_string()
        }
    );
}

#[test]
fn scheme_prefix_is_case_sensitive() {
    // Not a web link by prefix, so the URL path is inspected instead.
    assert_eq!(
        classify("HTTPS://example.com/member/bob"),
        member("bob", "/member/bob")
    );
}

#[test]
fn relative_anchor_reported_with_opaque_host_uses_url_path() {
    assert_eq!(
        classify("applewebdata://8B2C-11/member/carol"),
        member("carol", "/member/carol")
    );
    assert_eq!(
        classify("applewebdata://8B2C-11/t/42"),
        NavigationAction::OpenTopic {
            path: "/t/42".to_string()
        }
    );
}

#[test]
fn substring_matching_accepts_prefixed_paths() {
    assert_eq!(classify("/x/member/y/z"), member("z", "/x/member/y/z"));
}

#[test]
fn member_wins_over_topic_and_node() {
    assert_eq!(
        classify("/go/rust/member/dave"),
        member("dave", "/go/rust/member/dave")
    );
    assert_eq!(
        classify("/go/rust/t/1"),
        NavigationAction::OpenTopic {
            path: "/go/rust/t/1".to_string()
        }
    );
}

#[test]
fn empty_username_is_passed_through() {
    assert_eq!(classify("/member/"), member("", "/member/"));
}

#[test]
fn query_and_fragment_are_not_part_of_the_path() {
    assert_eq!(
        classify("/t/555?p=3#r_99"),
        NavigationAction::OpenTopic {
            path: "/t/555".to_string()
        }
    );
}

#[test]
fn classification_is_idempotent() {
    for link in ["/member/alice", "/t/1", "/go/x", "https://a.b", "", "/nope"] {
        assert_eq!(classify(link), classify(link));
    }
}

#[test]
fn each_rule_matches_independently_of_priority() {
    let parts = LinkParts::new("https://example.com/member/bob");
    let matched: Vec<_> = RULES
        .iter()
        .filter(|rule| rule.apply(&parts).is_some())
        .map(|rule| rule.name())
        .collect();

    assert_eq!(matched, vec!["web_page", "member"]);
}

#[test]
fn no_rule_matches_unknown_paths() {
    let parts = LinkParts::new("/about");
    assert!(RULES.iter().all(|rule| rule.apply(&parts).is_none()));
}

#[test]
fn actions_serialize_with_a_tag() {
    let json = serde_json::to_value(classify("/member/alice")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "action": "open_member",
            "username": "alice",
            "path": "/member/alice",
        })
    );
    assert_eq!(
        serde_json::to_value(NavigationAction::Unhandled).unwrap(),
        serde_json::json!({ "action": "unhandled" })
    );
}

#[test]
fn member_with_trailing_slash_keeps_username() {
    assert_eq!(classify("/member/alice/"), member("alice", "/member/alice/"));
}

#[test]
fn encoded_and_raw_member_links_agree() {
    let expected = member("小明", "/member/小明");

    assert_eq!(classify("/member/小明"), expected);
    assert_eq!(classify("/member/%E5%B0%8F%E6%98%8E"), expected);
    assert_eq!(classify("applewebdata://X/member/小明"), expected);
}
