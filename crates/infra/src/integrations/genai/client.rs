/// Chat-completions client implementing the suggestion provider port
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Method;
use serde_json::json;
use timeflow_core::{ProviderError, SuggestionProvider};
use timeflow_domain::{SchedulingInput, TimeFlowError, TimeSuggestion};
use tracing::{debug, info};

use crate::http::HttpClient;

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, JsonSchema, ResponseFormat,
};

const GENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_MAX_TOKENS: u32 = 1_024;
const DEFAULT_TEMPERATURE: f32 = 0.3;

const SYSTEM_PROMPT: &str =
    "You are an AI assistant that helps users schedule new events by suggesting the optimal time.";

/// Client for requesting scheduling suggestions from a chat-completions API.
///
/// The model is constrained with a strict JSON schema so its answer always
/// carries exactly `suggestedTime` and `reasoning`.
pub struct GenAiClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl GenAiClient {
    /// Create a new suggestion client.
    ///
    /// The HTTP client should be built with `max_attempts(1)`: a suggestion
    /// request is user-initiated and must not be retried automatically.
    pub fn new(api_key: String, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_url: GENAI_API_URL.to_string(),
        }
    }

    /// Override the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API URL (for testing and self-hosted gateways).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Build the user prompt from the scheduling input.
    fn build_prompt(&self, input: &SchedulingInput) -> String {
        let preferences = input.user_preferences.as_deref().unwrap_or("None");

        format!(
            "Consider the user's existing events, the duration of the new event, and the \
             user's preferences to find the best time slot.\n\n\
             Existing Events: {}\n\
             New Event Duration: {} minutes\n\
             User Preferences: {}\n\n\
             Suggest an optimal time for the new event and explain your reasoning.\n\n\
             Output the suggested time and reasoning in a JSON format.\n\
             Make sure that the \"suggestedTime\" is in ISO 8601 format.",
            input.existing_events, input.new_event_duration, preferences
        )
    }

    async fn call_api(&self, prompt: String) -> Result<TimeSuggestion, ProviderError> {
        let request_payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user".to_string(), content: prompt },
            ],
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: Some(JsonSchema {
                    name: "time_suggestion".to_string(),
                    schema: json!({
                        "type": "object",
                        "properties": {
                            "suggestedTime": {
                                "type": "string",
                                "description": "The suggested optimal time in ISO 8601 format"
                            },
                            "reasoning": {
                                "type": "string",
                                "description": "The reasoning behind the suggested time"
                            }
                        },
                        "required": ["suggestedTime", "reasoning"],
                        "additionalProperties": false
                    }),
                    strict: Some(true),
                }),
            },
        };

        let request_builder = self
            .http_client
            .request(Method::POST, &self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_payload);

        let response = self.http_client.send(request_builder).await.map_err(|err| match err {
            TimeFlowError::Network(msg) => ProviderError::Network(msg),
            TimeFlowError::Internal(msg) => ProviderError::Network(msg),
            other => ProviderError::Network(format!("HTTP error: {}", other)),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received suggestion API response");

        if !status.is_success() {
            return Err(self.handle_error_status(status.as_u16(), response).await);
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidSchema(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &chat_response.usage {
            info!(
                tokens = usage.total_tokens,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "suggestion request complete"
            );
        }

        let choice = chat_response.choices.first().ok_or_else(|| {
            ProviderError::InvalidSchema("Response contained no choices".to_string())
        })?;
        let content = &choice.message.content;
        let suggestion: TimeSuggestion = serde_json::from_str(content).map_err(|e| {
            ProviderError::InvalidSchema(format!(
                "Failed to parse suggestion: {}. Content: {}",
                e, content
            ))
        })?;

        if DateTime::parse_from_rfc3339(&suggestion.suggested_time).is_err() {
            return Err(ProviderError::InvalidSchema(format!(
                "suggestedTime is not a valid ISO 8601 timestamp: {}",
                suggestion.suggested_time
            )));
        }

        Ok(suggestion)
    }

    async fn handle_error_status(&self, status: u16, response: reqwest::Response) -> ProviderError {
        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 | 403 => ProviderError::Authentication(format!("Invalid API key ({})", status)),
            429 => ProviderError::RateLimit(60),
            _ => ProviderError::Api { status, message },
        }
    }
}

#[async_trait]
impl SuggestionProvider for GenAiClient {
    async fn suggest(&self, input: SchedulingInput) -> Result<TimeSuggestion, ProviderError> {
        info!(duration = %input.new_event_duration, "requesting scheduling suggestion");

        let prompt = self.build_prompt(&input);
        self.call_api(prompt).await
    }
}
