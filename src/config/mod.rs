mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = read_file(explicit_path.as_deref()).await?;
    config.apply_overrides(|key| env::var(key).ok());
    Ok(config)
}

/// Reads the YAML file at `path`, or at `config.yaml` when no path is given.
/// Only the implicit default path may be absent.
pub async fn read_file(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if path.is_none() && !Path::new(config_path).exists() {
        debug!("No {} found, using built-in defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies the function host's environment on top of the file values.
    /// Empty variables count as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(project) = var("PROJECT_ID") {
            self.vertex.project_id = Some(project);
        }
        if let Some(location) = var("LOCATION") {
            self.vertex.location = location;
        }
        if let Some(model) = var("MODEL_NAME") {
            self.vertex.model_name = model;
        }
        if let Some(port) = var("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }
}
