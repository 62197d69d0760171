pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod errors;
pub mod language;
pub mod logging;
pub mod scoring;

pub use classifier::Prediction;
pub use classifier::SentimentClassifier;
pub use config::AppConfig;
pub use errors::*;
pub use language::LanguageDetector;
pub use scoring::map_sentiment_to_value;
pub use scoring::ScoredSentiment;
pub use scoring::SentimentAnalyzer;
