use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentiscaleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Carries the detector's message verbatim so it reaches the client unchanged.
    #[error("{0}")]
    LanguageDetection(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl From<reqwest::Error> for SentiscaleError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SentiscaleError>;
