//! Request-shape tests for the X client.

use fabula_social::{CreatePostRequest, OAuthCredentials, PollSpec, XClient};
use serde_json::json;

#[test]
fn test_create_post_body_shape() {
    let body = CreatePostRequest {
        text: "You wake in a crater.\n\nvote on X's next move".to_string(),
        poll: PollSpec {
            options: vec!["Climb".into(), "Dig".into(), "Wait".into()],
            duration_minutes: 5,
        },
    };

    assert_eq!(
        serde_json::to_value(&body).expect("serializable"),
        json!({
            "text": "You wake in a crater.\n\nvote on X's next move",
            "poll": {"options": ["Climb", "Dig", "Wait"], "duration_minutes": 5}
        })
    );
}

#[test]
fn test_poll_lookup_params_request_poll_expansion() {
    let params = XClient::poll_lookup_params("1234");
    assert_eq!(params[0], ("ids", "1234"));
    assert!(params.contains(&("expansions", "attachments.poll_ids")));
    assert!(params.contains(&("poll.fields", "options,voting_status")));
}

#[test]
fn test_posts_url_is_rooted_at_base() {
    let credentials = OAuthCredentials::new("k", "s", "t", "ts");
    let client = XClient::new(credentials, "https://api.x.com/");
    assert_eq!(client.posts_url(), "https://api.x.com/2/tweets");
}
