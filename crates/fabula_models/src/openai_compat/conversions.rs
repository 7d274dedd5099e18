//! Type conversions between Fabula and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse};
use fabula_core::{GenerateRequest, GenerateResponse, TokenUsage};
use fabula_error::{GenerationError, GenerationErrorKind};

/// Converts a Fabula GenerateRequest to OpenAI chat format.
///
/// Request-level model and temperature override the client defaults.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
    default_temperature: Option<f32>,
) -> Result<ChatRequest, GenerationError> {
    let messages: Vec<ChatMessage> = req
        .messages
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role.to_string(),
            content: msg.content.clone(),
        })
        .collect();

    let model = req
        .model
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let mut builder = ChatRequest::builder();
    builder.model(model).messages(messages);

    if let Some(max_tokens) = req.max_tokens {
        builder.max_tokens(max_tokens);
    }

    if let Some(temp) = req.temperature.or(default_temperature) {
        builder.temperature(temp);
    }

    if let Some(effort) = &req.reasoning_effort {
        builder.reasoning_effort(effort.clone());
    }

    builder.build().map_err(|e| {
        GenerationError::new(GenerationErrorKind::InvalidRequest(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts an OpenAI chat response to a Fabula GenerateResponse.
///
/// Only the first choice is used; its content is trimmed.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, GenerationError> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.trim().to_string())
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyChoices))?;

    let usage = response.usage.as_ref().and_then(|u| {
        match (u.prompt_tokens, u.completion_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => Some(TokenUsage {
                input_tokens: input,
                output_tokens: output,
                total_tokens: total,
            }),
            _ => None,
        }
    });

    Ok(GenerateResponse { text, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_core::Prompt;

    #[test]
    fn test_request_uses_lowercase_roles_and_defaults() {
        let prompt = Prompt::new("You narrate.", "Begin on Mars.");
        let req = GenerateRequest::from_prompt(&prompt);

        let chat = to_chat_request(&req, "grok-3-mini", Some(0.6)).expect("valid request");
        let json = serde_json::to_value(&chat).expect("serializable");

        assert_eq!(json["model"], "grok-3-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Begin on Mars.");
        assert!((json["temperature"].as_f64().unwrap_or_default() - 0.6).abs() < 1e-6);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_reasoning_effort_is_serialized() {
        let prompt = Prompt::new("s", "u");
        let req = GenerateRequest::from_prompt(&prompt).with_reasoning_effort(Some("high".into()));

        let chat = to_chat_request(&req, "grok-3-mini", None).expect("valid request");
        let json = serde_json::to_value(&chat).expect("serializable");

        assert_eq!(json["reasoning_effort"], "high");
    }

    #[test]
    fn test_reasoning_effort_omitted_when_unset() {
        let req = GenerateRequest::from_prompt(&Prompt::new("s", "u"));

        let chat = to_chat_request(&req, "grok-3-mini", None).expect("valid request");
        let json = serde_json::to_value(&chat).expect("serializable");

        assert!(json.get("reasoning_effort").is_none());
    }

    #[test]
    fn test_request_overrides_win() {
        let prompt = Prompt::new("s", "u");
        let mut req = GenerateRequest::from_prompt(&prompt).with_temperature(0.1);
        req.model = Some("grok-3".to_string());

        let chat = to_chat_request(&req, "grok-3-mini", Some(0.6)).expect("valid request");
        assert_eq!(chat.model(), "grok-3");
        assert_eq!(*chat.temperature(), Some(0.1));
    }

    #[test]
    fn test_response_content_is_trimmed() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  The story.\n"}}],
                "usage":{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}"#,
        )
        .expect("valid json");

        let generated = from_chat_response(&response).expect("has a choice");
        assert_eq!(generated.text, "The story.");
        assert_eq!(generated.usage.map(|u| u.total_tokens), Some(15));
    }

    #[test]
    fn test_response_without_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).expect("valid json");
        let err = from_chat_response(&response).unwrap_err();
        assert_eq!(err.kind, GenerationErrorKind::EmptyChoices);
    }
}
