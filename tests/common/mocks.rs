use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use topic_ideas::{
    Error, Result,
    vertex::{AccessToken, PredictResponse, PredictionClient, PredictionTarget, TokenSource},
};

/// Mock credential source counting how often it was asked for a token
#[derive(Debug, Clone)]
pub struct MockTokenSource {
    pub token: String,
    pub calls: Arc<Mutex<usize>>,
    pub error: Option<String>,
}

impl MockTokenSource {
    pub fn new() -> Self {
        Self {
            token: "mock-token".to_string(),
            calls: Arc::new(Mutex::new(0)),
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Default for MockTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenSource for MockTokenSource {
    async fn fetch_token(&self) -> Result<AccessToken> {
        *self.calls.lock().unwrap() += 1;

        if let Some(ref error) = self.error {
            return Err(Error::metadata(error.clone()));
        }

        Ok(AccessToken::new(self.token.clone()))
    }
}

/// What the mock prediction client saw for one call
#[derive(Debug, Clone)]
pub struct RecordedPrediction {
    pub token: String,
    pub target: PredictionTarget,
    pub prompt: String,
}

/// Mock prediction client answering every call with the same body
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    pub response: serde_json::Value,
    pub requests: Arc<Mutex<Vec<RecordedPrediction>>>,
    pub failure: Option<(u16, String)>,
}

impl MockPredictionClient {
    pub fn with_content(content: &str) -> Self {
        Self::with_body(json!({ "predictions": [{ "content": content }] }))
    }

    pub fn with_body(body: serde_json::Value) -> Self {
        Self {
            response: body,
            requests: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn with_status_error(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    pub fn get_requests(&self) -> Vec<RecordedPrediction> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn predict(
        &self,
        token: &AccessToken,
        target: &PredictionTarget,
        prompt: &str,
    ) -> Result<PredictResponse> {
        self.requests.lock().unwrap().push(RecordedPrediction {
            token: token.expose().to_string(),
            target: target.clone(),
            prompt: prompt.to_string(),
        });

        if let Some((status, body)) = &self.failure {
            return Err(Error::Prediction {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(PredictResponse(self.response.clone()))
    }
}
