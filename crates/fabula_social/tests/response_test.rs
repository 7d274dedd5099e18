//! Status and body rules for X API responses.

use fabula_error::SocialErrorKind;
use fabula_interface::{PollOutcome, PostId};
use fabula_social::{interpret_create, interpret_lookup};

#[test]
fn test_created_post_returns_id() {
    let id = interpret_create(201, r#"{"data":{"id":"1790","text":"You wake."}}"#)
        .expect("201 with id succeeds");
    assert_eq!(id, PostId("1790".to_string()));
}

#[test]
fn test_create_with_ok_status_is_api_error() {
    let err = interpret_create(200, r#"{"data":{"id":"1790"}}"#).expect_err("only 201 succeeds");
    assert_eq!(
        err.kind,
        SocialErrorKind::Api {
            status: 200,
            body: r#"{"data":{"id":"1790"}}"#.to_string(),
        }
    );
}

#[test]
fn test_create_without_id_is_missing_post_id() {
    let err = interpret_create(201, r#"{"data":{"text":"You wake."}}"#).expect_err("id required");
    assert_eq!(err.kind, SocialErrorKind::MissingPostId);

    let err = interpret_create(201, "{}").expect_err("data required");
    assert_eq!(err.kind, SocialErrorKind::MissingPostId);
}

#[test]
fn test_create_rejection_keeps_status_and_body() {
    let body = r#"{"title":"Forbidden","detail":"duplicate content"}"#;
    let err = interpret_create(403, body).expect_err("403 fails");
    assert_eq!(
        err.kind,
        SocialErrorKind::Api {
            status: 403,
            body: body.to_string(),
        }
    );
    assert!(err.to_string().contains("403"));
}

#[test]
fn test_create_with_malformed_body_is_parse_error() {
    let err = interpret_create(201, "not json").expect_err("malformed body");
    assert!(matches!(err.kind, SocialErrorKind::ResponseParsing(_)));
}

#[test]
fn test_lookup_forbidden_is_api_error() {
    let err = interpret_lookup(403, "Forbidden").expect_err("403 fails");
    assert_eq!(
        err.kind,
        SocialErrorKind::Api {
            status: 403,
            body: "Forbidden".to_string(),
        }
    );
}

#[test]
fn test_lookup_created_status_is_api_error() {
    let err = interpret_lookup(201, "{}").expect_err("only 200 succeeds");
    assert!(matches!(err.kind, SocialErrorKind::Api { status: 201, .. }));
}

#[test]
fn test_lookup_ok_decides_poll() {
    let body = r#"{"includes":{"polls":[{"voting_status":"closed",
        "options":[{"label":"Run","votes":2},{"label":"Hide","votes":5}]}]}}"#;
    assert_eq!(
        interpret_lookup(200, body).expect("200 succeeds"),
        PollOutcome::Decided("Hide".to_string())
    );
}

#[test]
fn test_lookup_ok_without_poll_is_no_data() {
    assert_eq!(
        interpret_lookup(200, r#"{"data":[{"id":"1"}]}"#).expect("200 succeeds"),
        PollOutcome::NoPollData
    );
}
