use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL_NAME: &str = "text-bison@001";
pub const DEFAULT_METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub vertex: VertexConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexConfig {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_metadata_token_url")]
    pub metadata_token_url: String,
    /// Replaces `https://{location}-aiplatform.googleapis.com` when set.
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,
    #[serde(default = "default_prediction_timeout_ms")]
    pub prediction_timeout_ms: u64,
}

impl VertexConfig {
    /// The project is only needed once a generation is attempted, so a
    /// missing value surfaces per request rather than at startup.
    pub fn project_id(&self) -> Result<&str> {
        self.project_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::config("PROJECT_ID is not set"))
    }

    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_millis(self.metadata_timeout_ms)
    }

    pub fn prediction_timeout(&self) -> Duration {
        Duration::from_millis(self.prediction_timeout_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: default_location(),
            model_name: default_model_name(),
            metadata_token_url: default_metadata_token_url(),
            api_endpoint: None,
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
            prediction_timeout_ms: default_prediction_timeout_ms(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_metadata_token_url() -> String {
    DEFAULT_METADATA_TOKEN_URL.to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    512
}

fn default_metadata_timeout_ms() -> u64 {
    5_000
}

fn default_prediction_timeout_ms() -> u64 {
    10_000
}
