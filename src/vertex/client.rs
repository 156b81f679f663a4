use super::types::*;
use crate::{Error, Result, config::VertexConfig};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(
        &self,
        token: &AccessToken,
        target: &PredictionTarget,
        prompt: &str,
    ) -> Result<PredictResponse>;
}

pub struct VertexClient {
    client: reqwest::Client,
    api_endpoint: Option<String>,
    parameters: Parameters,
    timeout: Duration,
}

impl VertexClient {
    pub fn new(client: reqwest::Client, config: &VertexConfig) -> Self {
        Self {
            client,
            api_endpoint: config
                .api_endpoint
                .as_ref()
                .map(|e| e.trim_end_matches('/').to_string()),
            parameters: Parameters {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
            timeout: config.prediction_timeout(),
        }
    }

    fn url_for(&self, target: &PredictionTarget) -> String {
        let base = match &self.api_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}-aiplatform.googleapis.com", target.location),
        };
        format!("{}{}", base, target.path())
    }
}

#[async_trait]
impl PredictionClient for VertexClient {
    async fn predict(
        &self,
        token: &AccessToken,
        target: &PredictionTarget,
        prompt: &str,
    ) -> Result<PredictResponse> {
        let url = self.url_for(target);
        debug!("Sending prediction request to {}", url);

        let body = PredictRequest::single(prompt, self.parameters);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, token.bearer_header())
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::from_transport(e, "Vertex request timeout"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::from_transport(e, "Vertex request timeout"))?;

        if !status.is_success() {
            warn!("Vertex AI answered with status {}", status);
            return Err(Error::Prediction {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: PredictResponse = serde_json::from_str(&text)?;
        debug!("Received prediction response ({} bytes)", text.len());

        Ok(parsed)
    }
}
