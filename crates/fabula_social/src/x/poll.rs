//! Interpretation of poll lookup responses.

use crate::x::dto::PostLookupResponse;
use fabula_interface::PollOutcome;
use tracing::{debug, info};

const CLOSED: &str = "closed";

/// Decide what a poll lookup says about the vote.
///
/// Only the first included poll is considered. A closed poll is won by the
/// option with the strictly greatest vote count; on a tie the earliest option
/// wins.
///
/// # Examples
///
/// ```
/// use fabula_interface::PollOutcome;
/// use fabula_social::{PostLookupResponse, decide};
///
/// let response: PostLookupResponse = serde_json::from_str(
///     r#"{"includes":{"polls":[{"voting_status":"closed",
///         "options":[{"label":"A","votes":3},{"label":"B","votes":7}]}]}}"#,
/// ).unwrap();
///
/// assert_eq!(decide(&response), PollOutcome::Decided("B".to_string()));
/// ```
pub fn decide(response: &PostLookupResponse) -> PollOutcome {
    let Some(poll) = response
        .includes
        .as_ref()
        .and_then(|includes| includes.polls.first())
    else {
        info!("No poll data found in lookup response");
        return PollOutcome::NoPollData;
    };

    if poll.voting_status.as_deref() != Some(CLOSED) {
        info!(status = ?poll.voting_status, "Poll is still active");
        return PollOutcome::Open;
    }

    let mut leader: Option<(&str, u64)> = None;
    for choice in &poll.options {
        let Some(label) = choice.label.as_deref() else {
            continue;
        };
        if leader.is_none_or(|(_, votes)| choice.votes > votes) {
            leader = Some((label, choice.votes));
        }
    }

    match leader {
        Some((label, votes)) => {
            debug!(label, votes, "Poll decided");
            PollOutcome::Decided(label.to_string())
        }
        None => {
            info!("Closed poll has no options");
            PollOutcome::NoPollData
        }
    }
}
