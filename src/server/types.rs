use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn missing_topic() -> Self {
        Self {
            error: "Missing topic".to_string(),
            detail: None,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            error: "Internal error".to_string(),
            detail: Some(detail.into()),
        }
    }
}
