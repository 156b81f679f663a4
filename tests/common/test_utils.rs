use super::mocks::{MockPredictionClient, MockTokenSource};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use serde_json::Value;
use std::sync::Arc;
use topic_ideas::{
    config::VertexConfig,
    ideas::IdeaGenerator,
    server::{AppState, router},
};

/// Vertex settings with a project, so requests get as far as the upstreams
pub fn create_test_vertex_config() -> VertexConfig {
    VertexConfig {
        project_id: Some("test-project".to_string()),
        ..VertexConfig::default()
    }
}

/// Router wired to the given mocks
pub fn create_test_app(
    tokens: MockTokenSource,
    predictor: MockPredictionClient,
    vertex: VertexConfig,
) -> Router {
    let generator = IdeaGenerator::with_clients(Box::new(tokens), Box::new(predictor), vertex);
    router(AppState {
        generator: Arc::new(generator),
    })
}

pub fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Asserts the three CORS headers every response must carry
pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}
