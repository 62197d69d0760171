//! Arabic scoring path
//!
//! Labels from this path are lowercase (`positive`, `negative`, `neutral`).

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use super::ScoredSentiment;
use crate::classifier::Prediction;
use crate::classifier::SentimentClassifier;
use crate::errors::Result;

/// Matched as case-sensitive substrings.
pub const INSULTS: &[&str] = &[
    "غبي", "غبية", "مقرف", "مقرفة", "فاشل", "فاشلة", "كلب", "حمار", "حقير", "حقيرة", "سخيف",
    "سخيفة", "مغفل", "مغفلة", "زبالة", "وسخ", "وسخة", "خول",
];

/// Three or more khaa in a row ("خخخ"), the Arabic-script laughter.
pub const LAUGHTER_PATTERN: &str = "خ{3,}";

const INSULT_CONFIDENCE: f64 = 1.0;
const LAUGHTER_MIN_CONFIDENCE: f64 = 0.9;

pub struct ArabicScorer {
    classifier: Arc<dyn SentimentClassifier>,
    laughter: Regex,
}

impl ArabicScorer {
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Result<Self> {
        Ok(Self {
            classifier,
            laughter: Regex::new(LAUGHTER_PATTERN)?,
        })
    }

    pub fn has_insult(&self, text: &str) -> bool {
        INSULTS.iter().any(|insult| text.contains(insult))
    }

    pub fn has_laughter(&self, text: &str) -> bool {
        self.laughter.is_match(text)
    }

    pub async fn score(&self, text: &str) -> Result<ScoredSentiment> {
        let has_insult = self.has_insult(text);
        let has_laughter = self.has_laughter(text);

        let prediction = self.classifier.classify(text).await?;
        debug!(
            "Arabic classifier: {} ({:.4}), insult={has_insult}, laughter={has_laughter}",
            prediction.label, prediction.score
        );

        let (sentiment, confidence) = apply_overrides(prediction, has_insult, has_laughter);
        Ok(ScoredSentiment::new(sentiment, confidence))
    }
}

/// Rule-based corrections on top of the model output, first match wins
///
/// - an insult forces `negative` with full confidence;
/// - laughter on a `neutral`/`negative` prediction reads as mockery and forces
///   `negative` with at least 0.9 confidence;
/// - otherwise the prediction stands.
pub fn apply_overrides(
    prediction: Prediction,
    has_insult: bool,
    has_laughter: bool,
) -> (String, f64) {
    if has_insult {
        return ("negative".to_string(), INSULT_CONFIDENCE);
    }
    if has_laughter && matches!(prediction.label.as_str(), "neutral" | "negative") {
        return (
            "negative".to_string(),
            prediction.score.max(LAUGHTER_MIN_CONFIDENCE),
        );
    }
    (prediction.label, prediction.score)
}
