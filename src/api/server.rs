//! HTTP server implementation

use tracing::info;
use tracing::warn;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::scoring::SentimentAnalyzer;
use crate::Result;

/// Start the API server and run until Ctrl-C
pub async fn serve_api(config: &AppConfig, analyzer: SentimentAnalyzer) -> Result<()> {
    info!("🚀 Starting sentiscale API server...");

    let app = routes::app(AppState::new(analyzer), config.server.enable_cors);
    if config.server.enable_cors {
        info!("✅ CORS enabled");
    }

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  POST /analyze  - Sentiment for {{\"text\": ...}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
