//! Fixed prompt texts and the per-iteration prompt builder.

use fabula_core::{IterationState, Prompt};

/// Standing instruction for the storyteller.
pub const SYSTEM_PROMPT: &str = "You are a highly intelligent AI story generator that creates engaging, \
interactive 'Choose Your Own Adventure' narratives. At the end of each post you end with 3 options \
labeled Option 1: Option 2: Option 3: for polling reasons. these options MUST be less than 25 characters";

/// Scene-setting instruction for the first chapter.
pub const INITIAL_PROMPT: &str = "You are an AI narrating an interactive, never-ending 'Choose Your Own Adventure' story. \
The protagonist, X, stranded on Mars, embarks on a mysterious journey back to Earth that subtly hints at a cosmic secret called 'grokGantua'. \
Craft a 150-225 word narrative in second-person perspective describing X's challenges and enigmatic discoveries. poll options must be 25 characters max \
End with three numbered choices labeled 'Option 1:', 'Option 2:' and 'Option 3:' for X's next move. \
a poll option can never be more than 25 characters. the options 1 2 and 3 can not be over 25 characters long. use one word if needed";

/// Instruction for a chapter that continues from `choice`.
///
/// ```
/// let prompt = fabula_bot::continuation_prompt("Open the hatch");
/// assert!(prompt.contains("'Open the hatch'"));
/// ```
pub fn continuation_prompt(choice: &str) -> String {
    format!(
        "Continue the adventure narrative using the previous poll's winning option: '{}'. \
         Craft a new 150-225 word segment in second-person perspective that builds on the previous story and ends \
         with three new choices labeled 'Option 1:', 'Option 2:' and 'Option 3:' for X's next move.",
        choice
    )
}

/// Build the prompt pair for the next iteration.
///
/// The first iteration gets the opening scene. Later ones continue from the
/// previous winner, or from the previous first option when there was none.
pub fn build_prompt(previous: Option<&IterationState>) -> Prompt {
    let user = match previous {
        None => INITIAL_PROMPT.to_string(),
        Some(state) => continuation_prompt(state.carried_choice()),
    };
    Prompt::new(SYSTEM_PROMPT, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_core::PollOptions;

    fn options() -> PollOptions {
        PollOptions::new(["Dig".into(), "Climb".into(), "Radio home".into()])
    }

    #[test]
    fn test_first_iteration_uses_opening_scene() {
        let prompt = build_prompt(None);
        assert_eq!(prompt.user(), INITIAL_PROMPT);
        assert_eq!(prompt.system(), SYSTEM_PROMPT);
    }

    #[test]
    fn test_continuation_embeds_winner() {
        let state = IterationState::new(Some("Climb".into()), options());
        let prompt = build_prompt(Some(&state));
        assert!(prompt.user().contains("winning option: 'Climb'"));
    }

    #[test]
    fn test_continuation_without_winner_uses_first_option() {
        let state = IterationState::new(None, options());
        let prompt = build_prompt(Some(&state));
        assert!(prompt.user().contains("'Dig'"));
    }

    #[test]
    fn test_continuation_with_empty_options_uses_missing_label() {
        let state = IterationState::new(
            None,
            PollOptions::new([String::new(), String::new(), String::new()]),
        );
        let prompt = build_prompt(Some(&state));
        assert!(prompt.user().contains("'Option 1 missing'"));
    }
}
