//! Post text composition.

/// Appended to a story cut short to fit the post budget.
const ELLIPSIS: &str = "...";

/// Join the story and the call to action into one post.
///
/// The story may use `ceiling - len(call_to_action) - margin` characters; a
/// longer story is cut to exactly that many characters and suffixed with
/// `...`. The call to action follows after a blank line. All lengths are in
/// characters, not bytes.
///
/// ```
/// use fabula_bot::compose_post_text;
///
/// let post = compose_post_text("You wake up.", "vote!", 2500, 50);
/// assert_eq!(post, "You wake up.\n\nvote!");
/// ```
pub fn compose_post_text(story: &str, call_to_action: &str, ceiling: usize, margin: usize) -> String {
    let budget = ceiling
        .saturating_sub(call_to_action.chars().count())
        .saturating_sub(margin);

    let body = if story.chars().count() > budget {
        let mut cut: String = story.chars().take(budget).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        story.to_string()
    };

    format!("{}\n\n{}", body, call_to_action)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTA: &str = "vote on X's next move";

    #[test]
    fn test_long_story_is_cut_below_ceiling() {
        let story = "a".repeat(3000);
        let post = compose_post_text(&story, CTA, 2500, 50);

        let budget = 2500 - CTA.chars().count() - 50;
        assert!(post.chars().count() <= 2500);
        assert!(post.ends_with(&format!("...\n\n{}", CTA)));
        assert_eq!(post.chars().filter(|c| *c == 'a').count(), budget);
    }

    #[test]
    fn test_story_at_budget_is_untouched() {
        let budget = 2500 - CTA.chars().count() - 50;
        let story = "b".repeat(budget);
        let post = compose_post_text(&story, CTA, 2500, 50);
        assert_eq!(post, format!("{}\n\n{}", story, CTA));
    }

    #[test]
    fn test_empty_story_still_carries_call_to_action() {
        assert_eq!(compose_post_text("", CTA, 2500, 50), format!("\n\n{}", CTA));
    }

    #[test]
    fn test_budget_counts_characters_not_bytes() {
        let story = "é".repeat(100);
        let post = compose_post_text(&story, "go", 60, 8);
        assert!(post.starts_with(&format!("{}...", "é".repeat(50))));
    }
}
