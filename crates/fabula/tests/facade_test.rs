use fabula::{
    BotConfig, INITIAL_PROMPT, PollOptions, build_prompt, compose_post_text, extract_poll_options,
};

#[test]
fn test_chapter_flows_through_facade() {
    let story = "You find a buried rover.\nOption 1: Repair it\nOption 2: Strip parts\nOption 3: Leave";
    let options = extract_poll_options(story);
    assert_eq!(
        options,
        PollOptions::new(["Repair it".into(), "Strip parts".into(), "Leave".into()])
    );

    let config = BotConfig::default();
    let post = compose_post_text(
        story,
        &config.story.call_to_action,
        config.story.post_ceiling,
        config.story.safety_margin,
    );
    assert!(post.starts_with(story));
    assert!(post.ends_with("vote on X's next move"));
}

#[test]
fn test_opening_prompt_via_facade() {
    assert_eq!(build_prompt(None).user(), INITIAL_PROMPT);
}
