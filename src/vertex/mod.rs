pub mod client;
pub mod metadata;
pub mod types;

pub use client::{PredictionClient, VertexClient};
pub use metadata::{MetadataTokenSource, TokenSource};
pub use types::*;
