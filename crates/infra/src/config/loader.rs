//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TIMEFLOW_SERVER_HOST`: Bind address for the HTTP server
//! - `TIMEFLOW_SERVER_PORT`: Bind port for the HTTP server
//! - `TIMEFLOW_ASSISTANT_API_KEY`: API key for the suggestion provider
//! - `TIMEFLOW_ASSISTANT_MODEL`: Model name for the suggestion provider
//! - `TIMEFLOW_ASSISTANT_API_URL`: Optional override for the provider URL
//! - `TIMEFLOW_ASSISTANT_TIMEOUT`: Optional request timeout in seconds
//! - `TIMEFLOW_AUTH_PROVIDER_URL`: Base URL of the identity provider
//! - `TIMEFLOW_AUTH_API_KEY`: API key for the identity provider
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./timeflow.json` or `./timeflow.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use timeflow_domain::{
    AssistantConfig, AuthConfig, Config, Result, ServerConfig, TimeFlowError,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `TimeFlowError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing. See module documentation for the complete list.
pub fn load_from_env() -> Result<Config> {
    let host = env_var("TIMEFLOW_SERVER_HOST")?;
    let port = env_var("TIMEFLOW_SERVER_PORT").and_then(|s| {
        s.parse::<u16>().map_err(|e| TimeFlowError::Config(format!("Invalid port: {}", e)))
    })?;

    let assistant_api_key = env_var("TIMEFLOW_ASSISTANT_API_KEY")?;
    let assistant_model = env_var("TIMEFLOW_ASSISTANT_MODEL")?;
    let assistant_api_url = std::env::var("TIMEFLOW_ASSISTANT_API_URL").ok();
    let assistant_timeout = match std::env::var("TIMEFLOW_ASSISTANT_TIMEOUT") {
        Ok(s) => s
            .parse::<u64>()
            .map_err(|e| TimeFlowError::Config(format!("Invalid assistant timeout: {}", e)))?,
        Err(_) => timeflow_domain::config::default_assistant_timeout(),
    };

    let auth_provider_url = env_var("TIMEFLOW_AUTH_PROVIDER_URL")?;
    let auth_api_key = env_var("TIMEFLOW_AUTH_API_KEY")?;

    Ok(Config {
        server: ServerConfig { host, port },
        assistant: AssistantConfig {
            api_key: assistant_api_key,
            model: assistant_model,
            api_url: assistant_api_url,
            timeout_seconds: assistant_timeout,
        },
        auth: AuthConfig { provider_url: auth_provider_url, api_key: auth_api_key },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TimeFlowError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TimeFlowError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TimeFlowError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content. Format is detected by the file
/// extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TimeFlowError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TimeFlowError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TimeFlowError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and its two parents, then the
/// executable's directory and its two parents. Returns the first config
/// file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("timeflow.json"),
            cwd.join("timeflow.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("timeflow.json"),
                exe_dir.join("timeflow.toml"),
                exe_dir.join("../config.json"),
                exe_dir.join("../config.toml"),
                exe_dir.join("../../config.json"),
                exe_dir.join("../../config.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        TimeFlowError::Config(format!("Missing required environment variable: {}", key))
    })
}
