//! One-shot text analysis from the command line

use tracing::info;

use crate::api::types::AnalyzeResponse;
use crate::scoring::SentimentAnalyzer;
use crate::AppConfig;
use crate::Result;

/// Score `text` exactly as `POST /analyze` would and print the response body
pub async fn handle_analyze(config: &AppConfig, text: &str) -> Result<()> {
    let analyzer = SentimentAnalyzer::from_config(config)?;
    let response = AnalyzeResponse::from(analyzer.analyze(text).await?);
    info!(
        "{} (confidence {}, value {})",
        response.sentiment, response.confidence, response.value
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
