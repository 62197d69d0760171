/// Sentiment analysis handler
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::debug;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::error::ApiError;
use crate::api::types::AnalyzeResponse;

/// Analyze the sentiment of a text (POST /analyze)
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let text = extract_text(payload)?;
    info!("POST /analyze ({} chars)", text.chars().count());

    match state.analyzer.analyze(&text).await {
        Ok(scored) => {
            debug!(
                "Scored {} (confidence {:.4}, value {})",
                scored.sentiment, scored.confidence, scored.value
            );
            Ok(Json(AnalyzeResponse::from(scored)))
        }
        Err(e) => {
            error!("Error analyzing text: {}", e);
            Err(e.into())
        }
    }
}

/// Pull `text` out of the body; every unusable body is the same 400
fn extract_text(payload: Result<Json<Value>, JsonRejection>) -> Result<String, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        debug!("Rejected body: {}", rejection.body_text());
        ApiError::missing_text()
    })?;

    match body.get("text") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => {
            debug!("Non-string text field: {other}");
            Err(ApiError::BadRequest("'text' must be a string".to_string()))
        }
        None => Err(ApiError::missing_text()),
    }
}
