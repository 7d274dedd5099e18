//! Interpretation of raw X API responses.
//!
//! Pure functions of status code and body text, so every branch can be
//! checked without a network.

use crate::x::dto::{CreatePostResponse, PostLookupResponse};
use crate::x::poll::decide;
use fabula_error::{SocialError, SocialErrorKind};
use fabula_interface::{PollOutcome, PostId};

/// Status X returns for a created post.
pub const CREATED: u16 = 201;

/// Status X returns for a successful lookup.
pub const OK: u16 = 200;

/// Turn the response of `POST /2/tweets` into a post id.
///
/// Only `201` counts as success, and its body must carry `data.id`.
///
/// # Errors
///
/// `Api` for any other status, `ResponseParsing` for a malformed body and
/// `MissingPostId` when the id is absent.
///
/// ```
/// use fabula_social::interpret_create;
///
/// let id = interpret_create(201, r#"{"data":{"id":"42","text":"hi"}}"#).unwrap();
/// assert_eq!(id.0, "42");
/// assert!(interpret_create(200, r#"{"data":{"id":"42"}}"#).is_err());
/// ```
pub fn interpret_create(status: u16, body: &str) -> Result<PostId, SocialError> {
    if status != CREATED {
        return Err(SocialError::new(SocialErrorKind::Api {
            status,
            body: body.to_string(),
        }));
    }

    let created: CreatePostResponse = serde_json::from_str(body)
        .map_err(|e| SocialError::new(SocialErrorKind::ResponseParsing(e.to_string())))?;

    created
        .data
        .and_then(|post| post.id)
        .filter(|id| !id.is_empty())
        .map(PostId)
        .ok_or_else(|| SocialError::new(SocialErrorKind::MissingPostId))
}

/// Turn the response of the poll lookup into a [`PollOutcome`].
///
/// # Errors
///
/// `Api` for any status other than `200`, `ResponseParsing` for a malformed
/// body.
pub fn interpret_lookup(status: u16, body: &str) -> Result<PollOutcome, SocialError> {
    if status != OK {
        return Err(SocialError::new(SocialErrorKind::Api {
            status,
            body: body.to_string(),
        }));
    }

    let lookup: PostLookupResponse = serde_json::from_str(body)
        .map_err(|e| SocialError::new(SocialErrorKind::ResponseParsing(e.to_string())))?;

    Ok(decide(&lookup))
}
