use super::types::{AccessToken, TokenResponse};
use crate::{Error, Result, config::VertexConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";
const METADATA_FLAVOR: &str = "Google";

#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch_token(&self) -> Result<AccessToken>;
}

/// Pulls the default service account's token from the instance metadata
/// server. One attempt per call.
pub struct MetadataTokenSource {
    client: reqwest::Client,
    token_url: String,
    timeout: Duration,
}

impl MetadataTokenSource {
    pub fn new(client: reqwest::Client, config: &VertexConfig) -> Self {
        Self {
            client,
            token_url: config.metadata_token_url.clone(),
            timeout: config.metadata_timeout(),
        }
    }
}

#[async_trait]
impl TokenSource for MetadataTokenSource {
    async fn fetch_token(&self) -> Result<AccessToken> {
        debug!("Requesting access token from {}", self.token_url);

        let response = self
            .client
            .get(&self.token_url)
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::from_transport(e, "Metadata token timeout"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::from_transport(e, "Metadata token timeout"))?;

        if !status.is_success() {
            warn!("Metadata server answered with status {}", status);
            return Err(Error::metadata(format!(
                "Metadata server HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: TokenResponse = serde_json::from_str(&body)?;
        let token = parsed
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::metadata("No access_token"))?;

        debug!(
            "Obtained access token (type: {}, expires in: {}s)",
            parsed.token_type.as_deref().unwrap_or("unknown"),
            parsed.expires_in.unwrap_or_default()
        );

        Ok(AccessToken::new(token))
    }
}
