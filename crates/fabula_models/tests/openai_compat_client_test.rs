//! Construction tests for the chat-completion client.

use fabula_error::FabulaErrorKind;
use fabula_interface::CompletionDriver;
use fabula_models::{API_KEY_VAR, OpenAICompatibleClient};

#[test]
fn test_endpoint_joins_base_url() {
    let client = OpenAICompatibleClient::new(
        "key".to_string(),
        "grok-3-mini".to_string(),
        "https://api.x.ai/v1/",
        "xai",
    );
    assert_eq!(client.endpoint(), "https://api.x.ai/v1/chat/completions");
    assert_eq!(client.model_name(), "grok-3-mini");
    assert_eq!(client.provider_name(), "xai");
}

#[test]
fn test_from_lookup_reads_api_key() {
    let client = OpenAICompatibleClient::from_lookup(
        |var| (var == API_KEY_VAR).then(|| "secret".to_string()),
        "grok-3-mini".to_string(),
        "https://api.x.ai/v1",
    );
    assert!(client.is_ok());
}

#[test]
fn test_missing_api_key_is_config_error() {
    let result = OpenAICompatibleClient::from_lookup(
        |_| None,
        "grok-3-mini".to_string(),
        "https://api.x.ai/v1",
    );
    let err = result.unwrap_err();
    match err.kind() {
        FabulaErrorKind::Config(config) => assert!(config.message.contains(API_KEY_VAR)),
        other => panic!("expected config error, got {}", other),
    }
}

#[test]
fn test_blank_api_key_is_rejected() {
    let result = OpenAICompatibleClient::from_lookup(
        |_| Some("   ".to_string()),
        "grok-3-mini".to_string(),
        "https://api.x.ai/v1",
    );
    assert!(result.is_err());
}
