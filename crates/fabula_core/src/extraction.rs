//! Pulls poll options out of generated story text.
//!
//! The model is asked to finish each chapter with lines such as
//! `Option 1: Climb the ridge`. Whatever it actually returns, the extractor
//! always yields exactly three labels that fit the poll API.

use crate::{MAX_OPTION_CHARS, OPTION_COUNT, PollOptions, placeholder_option};
use regex::Regex;
use std::sync::LazyLock;

static OPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Option \d:\s*(.+)").expect("Valid option regex"));

/// Extract three poll options of at most [`MAX_OPTION_CHARS`] characters.
///
/// # Examples
///
/// ```
/// use fabula_core::extract_poll_options;
///
/// let story = "You reach the airlock.\nOption 1: Open it\nOption 2: Wait\n";
/// let options = extract_poll_options(story);
///
/// assert_eq!(options.as_slice(), ["Open it", "Wait", "Choice 3"]);
/// ```
pub fn extract_poll_options(story: &str) -> PollOptions {
    extract_poll_options_with_limit(story, MAX_OPTION_CHARS)
}

/// Extract three poll options, truncating each to `max_chars` characters.
///
/// Matches are taken in order of appearance; beyond the third they are
/// ignored. Positions without a match get a placeholder. Never fails.
pub fn extract_poll_options_with_limit(story: &str, max_chars: usize) -> PollOptions {
    let mut matches = OPTION_PATTERN
        .captures_iter(story)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    let options: [String; OPTION_COUNT] = std::array::from_fn(|index| match matches.next() {
        Some(raw) => raw.trim().chars().take(max_chars).collect(),
        None => placeholder_option(index + 1),
    });

    PollOptions::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_well_formed_options_verbatim() {
        let story = "The dust storm rolls in.\n\
                     Option 1: Seek shelter\n\
                     Option 2: Signal Earth\n\
                     Option 3: Follow the light";
        let options = extract_poll_options(story);
        assert_eq!(
            options.as_slice(),
            ["Seek shelter", "Signal Earth", "Follow the light"]
        );
    }

    #[test]
    fn test_no_options_yields_placeholders() {
        let options = extract_poll_options("");
        assert_eq!(options.as_slice(), ["Choice 1", "Choice 2", "Choice 3"]);
    }

    #[test]
    fn test_long_option_is_cut_to_twenty_chars() {
        let story = "Option 1: Negotiate with the ancient rover intelligence";
        let options = extract_poll_options(story);
        assert_eq!(options.first(), "Negotiate with the a");
        assert_eq!(options.first().chars().count(), 20);
    }

    #[test]
    fn test_extra_matches_are_ignored() {
        let story = "Option 1: A\nOption 2: B\nOption 3: C\nOption 4: D";
        let options = extract_poll_options(story);
        assert_eq!(options.as_slice(), ["A", "B", "C"]);
    }

    #[test]
    fn test_every_count_yields_three_bounded_options() {
        let lines = [
            "Option 1: Walk toward the crimson horizon",
            "Option 2: Dig",
            "Option 3: Call grokGantua by its true name",
            "Option 4: Sleep",
        ];
        for count in 0..=lines.len() {
            let story = lines[..count].join("\n");
            let options = extract_poll_options(&story);
            assert_eq!(options.iter().count(), OPTION_COUNT);
            assert!(options.iter().all(|o| o.chars().count() <= MAX_OPTION_CHARS));
        }
    }

    #[test]
    fn test_multibyte_text_is_not_split() {
        let story = "Option 1: ✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨✨";
        let options = extract_poll_options(story);
        assert_eq!(options.first().chars().count(), 20);
    }

    #[test]
    fn test_label_on_following_line() {
        let story = "Option 1:\n  Climb\nOption 2: Descend";
        let options = extract_poll_options(story);
        assert_eq!(options.as_slice(), ["Climb", "Descend", "Choice 3"]);
    }
}
