/// API request handlers
use std::sync::Arc;

use crate::scoring::SentimentAnalyzer;

pub mod analyze;

pub use analyze::*;

/// Shared application state
///
/// Classifiers live inside the analyzer and are never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
