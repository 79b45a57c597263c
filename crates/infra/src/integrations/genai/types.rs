/// Chat-completions wire types for the suggestion provider
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<JsonSchema>,
}

/// JSON schema wrapper used when `response_format = "json_schema"`.
#[derive(Debug, Serialize)]
pub(crate) struct JsonSchema {
    pub name: String,
    pub schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Usage {
    pub total_tokens: i32,
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_completion_response_without_usage() {
        let json = r#"{
            "choices": [{ "message": { "content": "{}" } }]
        }"#;

        let response: ChatCompletionResponse =
            serde_json::from_str(json).expect("should deserialize");

        assert_eq!(response.choices.len(), 1);
        assert!(response.usage.is_none());
    }

    #[test]
    fn deserializes_completion_response_with_usage() {
        let json = r#"{
            "choices": [{ "message": { "content": "hello" } }],
            "usage": { "total_tokens": 100, "prompt_tokens": 80, "completion_tokens": 20 }
        }"#;

        let response: ChatCompletionResponse =
            serde_json::from_str(json).expect("should deserialize");

        assert_eq!(response.choices[0].message.content, "hello");
        let usage = response.usage.expect("usage");
        assert_eq!(usage.total_tokens, 100);
        assert_eq!(usage.prompt_tokens, 80);
        assert_eq!(usage.completion_tokens, 20);
    }
}
