use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Metadata(String),

    #[error("Vertex AI HTTP {status}: {body}")]
    Prediction { status: u16, body: String },

    #[error("{0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Maps a transport failure, turning an expired wait into `Timeout` with
    /// the given message.
    pub fn from_transport(err: reqwest::Error, timeout_msg: &str) -> Self {
        if err.is_timeout() {
            Self::timeout(timeout_msg)
        } else {
            Self::Network(err)
        }
    }
}
