//! Configuration structures
//!
//! Populated by the loader in `timeflow-infra` from environment variables or
//! a `config.{toml,json}` file.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub assistant: AssistantConfig,
    pub auth: AuthConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Generative-model suggestion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// API key for the model service
    pub api_key: String,
    /// Model identifier (e.g. "gpt-4o-mini")
    pub model: String,
    /// Override for the chat-completions endpoint, mainly for tests
    #[serde(default)]
    pub api_url: Option<String>,
    /// Client-side timeout for one suggestion call, in seconds
    #[serde(default = "default_assistant_timeout")]
    pub timeout_seconds: u64,
}

/// Identity-provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the identity provider's REST API
    pub provider_url: String,
    /// Provider API key appended to requests
    pub api_key: String,
}

pub fn default_assistant_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_to_thirty_seconds() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[assistant]
api_key = "key"
model = "gpt-4o-mini"

[auth]
provider_url = "https://identity.example.com"
api_key = "auth-key"
"#;
        let config: Config = toml::from_str(toml_content).expect("should parse");
        assert_eq!(config.assistant.timeout_seconds, 30);
        assert_eq!(config.assistant.api_url, None);
    }
}
