pub mod handlers;
pub mod types;

use crate::{Result, config::Config, ideas::IdeaGenerator};
use axum::{
    Router,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    routing::post,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use handlers::AppState;

/// Builds the function's router. Every response, including rejections and
/// fallbacks, carries the permissive CORS headers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::generate_ideas).options(handlers::preflight),
        )
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("POST, OPTIONS"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                )),
        )
}

pub async fn run(config: Config) -> Result<()> {
    if config.vertex.project_id().is_err() {
        warn!("PROJECT_ID is not set; generation requests will fail until it is configured");
    }

    let generator = IdeaGenerator::new(config.vertex.clone())?;
    let app = router(AppState {
        generator: Arc::new(generator),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} (location: {}, model: {})",
        addr, config.vertex.location, config.vertex.model_name
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
