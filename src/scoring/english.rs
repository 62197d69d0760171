//! English scoring path, also used for every non-Arabic language
//!
//! The model only knows `POSITIVE` and `NEGATIVE`; labels from this path are
//! uppercase.

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use super::ScoredSentiment;
use crate::classifier::Prediction;
use crate::classifier::SentimentClassifier;
use crate::errors::Result;

/// Matched case-insensitively as substrings.
pub const INSULTS: &[&str] = &[
    "stupid",
    "idiot",
    "jerk",
    "loser",
    "fool",
    "moron",
    "trash",
    "disgusting",
    "pathetic",
    "dumb",
    "asshole",
    "shitty",
];

/// Whole-word laughter tokens: lol, lolll, haha, hahaha, hahaaa, lmaooo, rofl.
pub const LAUGHTER_PATTERN: &str = r"(?i)\b(lol+|(?:ha){2,}a*|lmao+|rofl+)\b";

const INSULT_CONFIDENCE: f64 = 0.8;
const LAUGHTER_MIN_CONFIDENCE: f64 = 0.7;

pub struct EnglishScorer {
    classifier: Arc<dyn SentimentClassifier>,
    laughter: Regex,
}

impl EnglishScorer {
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Result<Self> {
        Ok(Self {
            classifier,
            laughter: Regex::new(LAUGHTER_PATTERN)?,
        })
    }

    pub fn has_insult(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        INSULTS.iter().any(|insult| lowered.contains(insult))
    }

    pub fn has_laughter(&self, text: &str) -> bool {
        self.laughter.is_match(text)
    }

    pub async fn score(&self, text: &str) -> Result<ScoredSentiment> {
        let has_insult = self.has_insult(text);
        let has_laughter = self.has_laughter(text);

        let prediction = self.classifier.classify(text).await?;
        debug!(
            "English classifier: {} ({:.4}), insult={has_insult}, laughter={has_laughter}",
            prediction.label, prediction.score
        );

        let (sentiment, confidence) = apply_overrides(prediction, has_insult, has_laughter);
        Ok(ScoredSentiment::new(sentiment, confidence))
    }
}

/// Rule-based corrections on top of the model output, first match wins
///
/// - an insult forces `NEGATIVE` at a fixed 0.8 (the Arabic path uses 1.0);
/// - laughter on a `NEGATIVE` prediction raises confidence to at least 0.7;
/// - otherwise the prediction stands.
pub fn apply_overrides(
    prediction: Prediction,
    has_insult: bool,
    has_laughter: bool,
) -> (String, f64) {
    if has_insult {
        return ("NEGATIVE".to_string(), INSULT_CONFIDENCE);
    }
    if has_laughter && prediction.label == "NEGATIVE" {
        return (
            prediction.label,
            prediction.score.max(LAUGHTER_MIN_CONFIDENCE),
        );
    }
    (prediction.label, prediction.score)
}
