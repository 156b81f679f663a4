use super::prompt::{Topic, build_prompt, extract_ideas};
use crate::{
    Result,
    config::VertexConfig,
    vertex::{MetadataTokenSource, PredictionClient, PredictionTarget, TokenSource, VertexClient},
};
use tracing::{debug, info};

/// Runs one generation: credential, then prediction, then post-processing.
/// Holds no per-request state, so a single instance serves concurrent calls.
pub struct IdeaGenerator {
    token_source: Box<dyn TokenSource>,
    predictor: Box<dyn PredictionClient>,
    vertex: VertexConfig,
}

impl IdeaGenerator {
    pub fn new(vertex: VertexConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self::with_clients(
            Box::new(MetadataTokenSource::new(http.clone(), &vertex)),
            Box::new(VertexClient::new(http, &vertex)),
            vertex,
        ))
    }

    pub fn with_clients(
        token_source: Box<dyn TokenSource>,
        predictor: Box<dyn PredictionClient>,
        vertex: VertexConfig,
    ) -> Self {
        Self {
            token_source,
            predictor,
            vertex,
        }
    }

    fn target(&self) -> Result<PredictionTarget> {
        Ok(PredictionTarget {
            project: self.vertex.project_id()?.to_string(),
            location: self.vertex.location.clone(),
            model: self.vertex.model_name.clone(),
        })
    }

    pub async fn generate(&self, topic: &Topic) -> Result<Vec<String>> {
        let target = self.target()?;
        let prompt = build_prompt(topic);
        debug!("Generating ideas for topic: {}", topic.as_str());

        let token = self.token_source.fetch_token().await?;
        let response = self.predictor.predict(&token, &target, &prompt).await?;

        let ideas = extract_ideas(response.first_content());
        info!(
            "Generated ideas with model {} in {}",
            target.model, target.location
        );

        Ok(ideas)
    }
}
