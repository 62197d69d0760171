//! API request and response types

use serde::Deserialize;
use serde::Serialize;

use crate::scoring::round2;
use crate::scoring::ScoredSentiment;

/// Analyze request
///
/// Only used for documentation and clients; the handler reads the body as a
/// raw JSON value so every malformed shape maps to the same 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Analyze response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: String,
    pub confidence: f64,
    pub value: f64,
}

impl From<ScoredSentiment> for AnalyzeResponse {
    fn from(scored: ScoredSentiment) -> Self {
        Self {
            sentiment: scored.sentiment,
            confidence: round2(scored.confidence),
            value: scored.value,
        }
    }
}

/// Error body shared by every failure status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_rounds_confidence() {
        let response = AnalyzeResponse::from(ScoredSentiment::new("POSITIVE", 0.987_654));
        assert_eq!(response.confidence, 0.99);
        assert_eq!(response.value, 9.96);
    }

    #[test]
    fn test_response_serialization() {
        let response = AnalyzeResponse::from(ScoredSentiment::new("negative", 1.0));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sentiment": "negative", "confidence": 1.0, "value": 0.5})
        );
    }
}
