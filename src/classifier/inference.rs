//! HTTP client for hosted text-classification models

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::Prediction;
use super::SentimentClassifier;
use crate::config::ClassifierConfig;
use crate::errors::Result;
use crate::errors::SentiscaleError;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Single-input responses come back either nested one level (one list per
/// input) or flat, depending on the serving stack.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<Prediction>>),
    Flat(Vec<Prediction>),
}

impl InferenceResponse {
    fn into_candidates(self) -> Vec<Prediction> {
        match self {
            Self::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            Self::Flat(candidates) => candidates,
        }
    }
}

/// Classifier backed by a remote inference endpoint
///
/// The client is built once and reused; `reqwest::Client` is internally
/// reference counted, so one instance serves all concurrent requests.
pub struct InferenceClassifier {
    client: Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl InferenceClassifier {
    /// Create a classifier from its configuration
    ///
    /// # Errors
    /// - HTTP client build errors (invalid TLS backend configuration)
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a classifier that reuses an existing HTTP client
    pub fn with_client(client: Client, config: &ClassifierConfig) -> Self {
        let url = format!(
            "{}/{}",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        Self {
            client,
            url,
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SentimentClassifier for InferenceClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction> {
        debug!("Calling inference API: {}", self.url);

        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&InferenceRequest { inputs: text });
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SentiscaleError::Classifier(format!(
                "{} returned {status}: {error_text}",
                self.model
            )));
        }

        let body: InferenceResponse = response.json().await.map_err(|e| {
            SentiscaleError::Classifier(format!("Failed to parse response: {e}"))
        })?;

        let prediction = body
            .into_candidates()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| SentiscaleError::Classifier("No prediction in response".to_string()))?;

        debug!(
            "{} -> {} ({:.4})",
            self.model, prediction.label, prediction.score
        );
        Ok(prediction)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
