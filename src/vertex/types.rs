use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Short-lived bearer credential. Redacted in `Debug` output.
#[derive(Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Body of the metadata server's token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Fully qualified model the prediction is sent to.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTarget {
    pub project: String,
    pub location: String,
    pub model: String,
}

impl PredictionTarget {
    pub fn path(&self) -> String {
        format!(
            "/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
            urlencoding::encode(&self.project),
            urlencoding::encode(&self.location),
            urlencoding::encode(&self.model)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<Instance>,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct Instance {
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl PredictRequest {
    pub fn single(prompt: &str, parameters: Parameters) -> Self {
        Self {
            instances: vec![Instance {
                content: prompt.to_string(),
            }],
            parameters,
        }
    }
}

/// Parsed `:predict` body. Kept as raw JSON so an unexpected shape degrades
/// to an empty text instead of a parse failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PredictResponse(pub Value);

impl PredictResponse {
    /// Text of `predictions[0].content`, or `""` when absent.
    pub fn first_content(&self) -> &str {
        self.0
            .get("predictions")
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("content"))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}
