use fabula_bot::{
    BotConfig, MAX_PLATFORM_OPTION_CHARS, MIN_SAFETY_MARGIN, StoryConfig, compose_post_text,
};
use std::io::Write;

#[test]
fn test_bundled_config_matches_defaults() {
    let config = BotConfig::bundled().expect("Bundled config parses");
    assert_eq!(config, BotConfig::default());
}

#[test]
fn test_bundled_story_values() {
    let story = BotConfig::bundled().expect("Bundled config parses").story;
    assert_eq!(story.initial_poll_minutes, 5);
    assert_eq!(story.poll_increment_minutes, 1);
    assert_eq!(story.grace_minutes, 4);
    assert_eq!(story.post_ceiling, 2500);
    assert_eq!(story.safety_margin, 50);
    assert_eq!(story.call_to_action, "vote on X's next move");
}

#[test]
fn test_file_overrides_single_value() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Create temp file");
    writeln!(file, "[story]\ngrace_minutes = 1\n\n[completion]\nmodel = \"grok-4\"")
        .expect("Write temp file");

    let config = BotConfig::from_file(file.path()).expect("Config loads");

    assert_eq!(config.story.grace_minutes, 1);
    assert_eq!(config.story.initial_poll_minutes, 5);
    assert_eq!(config.completion.model, "grok-4");
    assert_eq!(config.completion.base_url, "https://api.x.ai/v1");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = BotConfig::load_with(Some("/nonexistent/fabula-config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_value_is_an_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Create temp file");
    writeln!(file, "[story]\ngrace_minutes = \"soon\"").expect("Write temp file");

    let err = BotConfig::from_file(file.path()).expect_err("Invalid value rejected");
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_margin_covers_composition_overhead() {
    let story = StoryConfig::default();
    assert!(story.safety_margin >= MIN_SAFETY_MARGIN);
    assert_eq!(MIN_SAFETY_MARGIN, "...\n\n".len());
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Create temp file");
    write!(file, "{}", contents).expect("Write temp file");
    file
}

#[test]
fn test_bundled_reasoning_effort_is_high() {
    let config = BotConfig::bundled().expect("Bundled config parses");
    assert_eq!(config.completion.reasoning_effort.as_deref(), Some("high"));
}

#[test]
fn test_small_safety_margin_is_rejected() {
    let file = write_config("[story]\nsafety_margin = 4\n");
    let err = BotConfig::from_file(file.path()).expect_err("Margin below minimum rejected");
    assert!(err.to_string().contains("safety_margin"));
}

#[test]
fn test_minimum_safety_margin_is_accepted() {
    let file = write_config(&format!("[story]\nsafety_margin = {}\n", MIN_SAFETY_MARGIN));
    let config = BotConfig::from_file(file.path()).expect("Minimum margin accepted");
    assert_eq!(config.story.safety_margin, MIN_SAFETY_MARGIN);
}

#[test]
fn test_zero_option_chars_is_rejected() {
    let file = write_config("[story]\nmax_option_chars = 0\n");
    let err = BotConfig::from_file(file.path()).expect_err("Zero-length options rejected");
    assert!(err.to_string().contains("max_option_chars"));
}

#[test]
fn test_option_chars_above_platform_limit_is_rejected() {
    let file = write_config("[story]\nmax_option_chars = 26\n");
    assert!(BotConfig::from_file(file.path()).is_err());

    let file = write_config(&format!(
        "[story]\nmax_option_chars = {}\n",
        MAX_PLATFORM_OPTION_CHARS
    ));
    assert!(BotConfig::from_file(file.path()).is_ok());
}

#[test]
fn test_validated_margin_keeps_post_under_ceiling() {
    let mut story = StoryConfig::default();
    story.safety_margin = MIN_SAFETY_MARGIN;
    story.validate().expect("Minimum margin is valid");

    let post = compose_post_text(
        &"x".repeat(story.post_ceiling * 2),
        &story.call_to_action,
        story.post_ceiling,
        story.safety_margin,
    );
    assert!(post.chars().count() <= story.post_ceiling);
}
