//! Sentiment classifiers
//!
//! A classifier turns a text into a single `(label, score)` prediction. Label
//! casing is whatever the underlying model emits; callers must not assume a
//! normalized label space.

pub mod inference;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

pub use inference::InferenceClassifier;

use crate::errors::Result;

/// A sentiment prediction with label and confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted sentiment (e.g. "positive", "NEGATIVE").
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A text classifier shared read-only across requests
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Prediction>;

    /// Model identifier, for logs
    fn model(&self) -> &str;
}
