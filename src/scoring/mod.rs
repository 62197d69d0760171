//! Sentiment scoring: language dispatch, keyword heuristics and the value scale
//!
//! Each language path runs its classifier, applies rule-based overrides on top
//! of the model output, then maps `(sentiment, confidence)` onto the
//! continuous value scale:
//!
//! | sentiment | value range | formula |
//! |-----------|-------------|---------|
//! | positive  | [7.1, 10]   | `7.1 + (10 - 7.1) * c` |
//! | neutral   | [4.1, 7]    | `4.1 + (7 - 4.1) * c` |
//! | negative  | [4, 0.5]    | `4 - (4 - 0.5) * c` |
//!
//! Labels keep the casing of the path that produced them: the Arabic path
//! answers in lowercase, the English path in uppercase.

pub mod arabic;
pub mod english;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use tracing::info;

pub use arabic::ArabicScorer;
pub use english::EnglishScorer;

use crate::classifier::InferenceClassifier;
use crate::classifier::SentimentClassifier;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::language::LanguageDetector;
use crate::language::WhatlangDetector;
use crate::language::ARABIC;

/// Final sentiment for one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentiment {
    pub sentiment: String,
    pub confidence: f64,
    pub value: f64,
}

impl ScoredSentiment {
    pub fn new(sentiment: impl Into<String>, confidence: f64) -> Self {
        let sentiment = sentiment.into();
        let value = map_sentiment_to_value(&sentiment, confidence);
        Self {
            sentiment,
            confidence,
            value,
        }
    }
}

/// Round to two decimals on the exact binary value, ties to even
///
/// `2.675` is stored slightly below the tie and rounds to `2.67`, and
/// `0.125` is an exact tie and rounds to `0.12`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Map a sentiment label and its confidence onto the value scale
///
/// The label is matched case-insensitively; anything that is neither positive
/// nor negative is scored on the neutral band.
pub fn map_sentiment_to_value(sentiment: &str, confidence: f64) -> f64 {
    let value = if sentiment.eq_ignore_ascii_case("positive") {
        7.1 + (10.0 - 7.1) * confidence
    } else if sentiment.eq_ignore_ascii_case("negative") {
        // Bottoms out at 0.5, not 1.
        4.0 - (4.0 - 0.5) * confidence
    } else {
        4.1 + (7.0 - 4.1) * confidence
    };
    round2(value)
}

/// Detects the language of a text and routes it to the matching scorer
pub struct SentimentAnalyzer {
    detector: Arc<dyn LanguageDetector>,
    arabic: ArabicScorer,
    english: EnglishScorer,
}

impl SentimentAnalyzer {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        arabic_classifier: Arc<dyn SentimentClassifier>,
        english_classifier: Arc<dyn SentimentClassifier>,
    ) -> Result<Self> {
        Ok(Self {
            detector,
            arabic: ArabicScorer::new(arabic_classifier)?,
            english: EnglishScorer::new(english_classifier)?,
        })
    }

    /// Build the analyzer with the configured remote classifiers
    ///
    /// Both classifier handles are created here, once, and shared by every
    /// request afterwards.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let arabic = InferenceClassifier::new(&config.classifiers.arabic)?;
        let english = InferenceClassifier::new(&config.classifiers.english)?;
        info!("Arabic classifier: {} ({})", arabic.model(), arabic.url());
        info!("English classifier: {} ({})", english.model(), english.url());

        Self::new(
            Arc::new(WhatlangDetector::new()),
            Arc::new(arabic),
            Arc::new(english),
        )
    }

    /// Score `text` with the scorer for its detected language
    ///
    /// Only Arabic gets its own path; every other detected language,
    /// including misdetections, is scored as English.
    pub async fn analyze(&self, text: &str) -> Result<ScoredSentiment> {
        let language = self.detector.detect(text)?;
        debug!("Detected language: {language}");

        if language == ARABIC {
            self.arabic.score(text).await
        } else {
            self.english.score(text).await
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::FixedClassifier;
    use super::*;
    use crate::errors::SentiscaleError;

    struct StaticDetector(Option<&'static str>);

    impl LanguageDetector for StaticDetector {
        fn detect(&self, _text: &str) -> Result<String> {
            self.0.map(str::to_string).ok_or_else(|| {
                SentiscaleError::LanguageDetection("No features in text.".to_string())
            })
        }
    }

    fn analyzer(
        language: Option<&'static str>,
        arabic: Arc<FixedClassifier>,
        english: Arc<FixedClassifier>,
    ) -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(StaticDetector(language)), arabic, english).unwrap()
    }

    #[test]
    fn test_positive_mapping() {
        for c in [0.0, 0.25, 0.5, 0.95, 1.0] {
            let expected = round2(7.1 + 2.9 * c);
            assert_eq!(map_sentiment_to_value("positive", c), expected);
            assert_eq!(map_sentiment_to_value("POSITIVE", c), expected);
        }
        assert_eq!(map_sentiment_to_value("POSITIVE", 0.95), 9.86);
        assert_eq!(map_sentiment_to_value("positive", 0.0), 7.1);
        assert_eq!(map_sentiment_to_value("positive", 1.0), 10.0);
    }

    #[test]
    fn test_negative_mapping_bottoms_out_at_half() {
        for c in [0.0, 0.3, 0.7, 0.8, 1.0] {
            let value = map_sentiment_to_value("negative", c);
            assert_eq!(value, round2(4.0 - 3.5 * c));
            assert!((0.5..=4.0).contains(&value));
        }
        assert_eq!(map_sentiment_to_value("NEGATIVE", 0.0), 4.0);
        assert_eq!(map_sentiment_to_value("negative", 1.0), 0.5);
        assert_eq!(map_sentiment_to_value("NEGATIVE", 0.8), 1.2);
    }

    #[test]
    fn test_neutral_and_unknown_labels_use_neutral_band() {
        for c in [0.0, 0.5, 1.0] {
            let expected = round2(4.1 + 2.9 * c);
            assert_eq!(map_sentiment_to_value("neutral", c), expected);
            assert_eq!(map_sentiment_to_value("LABEL_2", c), expected);
        }
        assert_eq!(map_sentiment_to_value("neutral", 1.0), 7.0);
    }

    #[test]
    fn test_mapping_is_case_insensitive() {
        assert_eq!(
            map_sentiment_to_value("Positive", 0.4),
            map_sentiment_to_value("positive", 0.4)
        );
        assert_eq!(
            map_sentiment_to_value("Negative", 0.4),
            map_sentiment_to_value("NEGATIVE", 0.4)
        );
    }

    #[test]
    fn test_round2_uses_exact_binary_value() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(0.912_345), 0.91);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_negative_mapping_near_ties() {
        assert_eq!(map_sentiment_to_value("negative", 0.01), 3.96);
        assert_eq!(map_sentiment_to_value("NEGATIVE", 0.07), 3.75);
    }

    #[test]
    fn test_scored_sentiment_derives_value() {
        let scored = ScoredSentiment::new("negative", 1.0);
        assert_eq!(scored.value, 0.5);
        assert_eq!(scored.sentiment, "negative");
    }

    #[tokio::test]
    async fn test_arabic_detection_uses_arabic_classifier() {
        let arabic = Arc::new(FixedClassifier::new("positive", 0.8));
        let english = Arc::new(FixedClassifier::new("NEGATIVE", 0.8));
        let analyzer = analyzer(Some("ar"), arabic.clone(), english.clone());

        let scored = analyzer.analyze("يوم جميل").await.unwrap();
        assert_eq!(scored.sentiment, "positive");
        assert_eq!(arabic.calls(), 1);
        assert_eq!(english.calls(), 0);
    }

    #[tokio::test]
    async fn test_other_languages_fall_through_to_english() {
        for code in ["en", "fr", "de", "so"] {
            let arabic = Arc::new(FixedClassifier::new("positive", 0.8));
            let english = Arc::new(FixedClassifier::new("NEGATIVE", 0.6));
            let analyzer = analyzer(Some(code), arabic.clone(), english.clone());

            let scored = analyzer.analyze("c'est la vie").await.unwrap();
            assert_eq!(scored.sentiment, "NEGATIVE");
            assert_eq!(arabic.calls(), 0);
            assert_eq!(english.calls(), 1);
        }
    }

    #[tokio::test]
    async fn test_short_arabic_insults_take_arabic_path() {
        for text in ["انت غبي", "انت حمار", "شكرا خخخخ يا غبي"] {
            let arabic = Arc::new(FixedClassifier::new("positive", 0.97));
            let english = Arc::new(FixedClassifier::new("POSITIVE", 0.97));
            let analyzer = SentimentAnalyzer::new(
                Arc::new(WhatlangDetector::new()),
                arabic.clone(),
                english.clone(),
            )
            .unwrap();

            let scored = analyzer.analyze(text).await.unwrap();
            assert_eq!(scored, ScoredSentiment::new("negative", 1.0), "{text}");
            assert_eq!(scored.value, 0.5);
            assert_eq!(english.calls(), 0, "{text}");
        }
    }

    #[tokio::test]
    async fn test_short_arabic_laughter_takes_arabic_path() {
        let arabic = Arc::new(FixedClassifier::new("neutral", 0.6));
        let english = Arc::new(FixedClassifier::new("POSITIVE", 0.6));
        let analyzer = SentimentAnalyzer::new(
            Arc::new(WhatlangDetector::new()),
            arabic.clone(),
            english,
        )
        .unwrap();

        let scored = analyzer.analyze("خخخخخ").await.unwrap();
        assert_eq!(scored, ScoredSentiment::new("negative", 0.9));
        assert_eq!(scored.value, 0.85);
        assert_eq!(arabic.calls(), 1);
    }

    #[tokio::test]
    async fn test_detection_failure_skips_classifiers() {
        let arabic = Arc::new(FixedClassifier::new("positive", 0.8));
        let english = Arc::new(FixedClassifier::new("POSITIVE", 0.8));
        let analyzer = analyzer(None, arabic.clone(), english.clone());

        let err = analyzer.analyze("123").await.unwrap_err();
        assert!(matches!(err, SentiscaleError::LanguageDetection(_)));
        assert_eq!(arabic.calls() + english.calls(), 0);
    }
}
