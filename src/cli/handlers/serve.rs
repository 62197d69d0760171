//! API server handlers

use crate::cli::output::*;
use crate::scoring::SentimentAnalyzer;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve_api(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
) -> Result<()> {
    use crate::api::serve_api;

    // CLI arguments take priority over config
    let mut config = config.clone();
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.server.enable_cors |= cors;
    config.validate()?;

    print_header("🚀 Starting sentiscale API Server");
    println!("📍 Host: {}", config.server.host);
    println!("🔌 Port: {}", config.server.port);
    println!(
        "🌐 CORS: {}",
        if config.server.enable_cors {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    println!();

    let analyzer = SentimentAnalyzer::from_config(&config)?;
    serve_api(&config, analyzer).await
}
