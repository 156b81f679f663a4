use super::types::{ErrorResponse, IdeasResponse};
use crate::{
    Error,
    ideas::{IdeaGenerator, Topic},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<IdeaGenerator>,
}

/// Failure outcomes of the generation endpoint.
#[derive(Debug)]
pub enum ApiError {
    MissingTopic,
    Internal(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingTopic => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::missing_topic())).into_response()
            }
            Self::Internal(err) => {
                error!("generate_ideas error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal(err.to_string())),
                )
                    .into_response()
            }
        }
    }
}

/// Reads `topic` from a JSON body. Unparseable bodies are treated like a
/// body without a topic.
pub fn topic_from_body(body: &[u8]) -> Option<Topic> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("topic").and_then(Topic::from_json)
}

pub async fn generate_ideas(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdeasResponse>, ApiError> {
    let topic = topic_from_body(&body).ok_or(ApiError::MissingTopic)?;

    let ideas = state.generator.generate(&topic).await?;

    Ok(Json(IdeasResponse { ideas }))
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Preflight is answered on any path; everything else off `/` is unknown.
pub async fn fallback(method: Method) -> StatusCode {
    if method == Method::OPTIONS {
        StatusCode::NO_CONTENT
    } else {
        debug!("No route for {} request", method);
        StatusCode::NOT_FOUND
    }
}
