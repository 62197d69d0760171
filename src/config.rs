use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::Result;
use crate::errors::SentiscaleError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Remote text-classification model used by one language path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Base URL of the inference service; the model id is appended to it
    #[serde(default = "default_inference_endpoint")]
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_inference_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClassifierConfig {
    fn with_model(model: &str) -> Self {
        Self {
            endpoint: default_inference_endpoint(),
            model: model.to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SentiscaleError::Config(format!(
                "classifiers.{name}.endpoint must not be empty"
            )));
        }
        if self.model.trim().is_empty() {
            return Err(SentiscaleError::Config(format!(
                "classifiers.{name}.model must not be empty"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SentiscaleError::Config(format!(
                "classifiers.{name}.timeout_secs must be greater than zero"
            )));
        }
        Ok(())
    }
}

pub const DEFAULT_ARABIC_MODEL: &str = "CAMeL-Lab/bert-base-arabic-camelbert-mix-sentiment";
pub const DEFAULT_ENGLISH_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

fn default_arabic_classifier() -> ClassifierConfig {
    ClassifierConfig::with_model(DEFAULT_ARABIC_MODEL)
}

fn default_english_classifier() -> ClassifierConfig {
    ClassifierConfig::with_model(DEFAULT_ENGLISH_MODEL)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiersConfig {
    #[serde(default = "default_arabic_classifier")]
    pub arabic: ClassifierConfig,
    #[serde(default = "default_english_classifier")]
    pub english: ClassifierConfig,
}

impl Default for ClassifiersConfig {
    fn default() -> Self {
        Self {
            arabic: default_arabic_classifier(),
            english: default_english_classifier(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub classifiers: ClassifiersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default locations
    ///
    /// Tries `config.toml`, then `config.example.toml`, and falls back to the
    /// built-in defaults when neither exists.
    pub fn load() -> Result<Self> {
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            eprintln!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            eprintln!("Warning: No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(SentiscaleError::Config(
                "server.host must not be empty".to_string(),
            ));
        }
        self.classifiers.arabic.validate("arabic")?;
        self.classifiers.english.validate("english")?;
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_service_contract() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert!(!config.server.enable_cors);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.classifiers.arabic.model, DEFAULT_ARABIC_MODEL);
        assert_eq!(config.classifiers.english.model, DEFAULT_ENGLISH_MODEL);
        assert!(config.classifiers.english.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [classifiers.english]
            model = "my-org/sst2"
            api_key = "hf_test"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.classifiers.english.model, "my-org/sst2");
        assert_eq!(config.classifiers.english.api_key.as_deref(), Some("hf_test"));
        assert_eq!(config.classifiers.english.timeout_secs, 30);
        assert_eq!(config.classifiers.arabic.model, DEFAULT_ARABIC_MODEL);
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = AppConfig::default();
        config.classifiers.arabic.model = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("classifiers.arabic.model"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.classifiers.english.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(SentiscaleError::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 3001\nenable_cors = true\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
        assert!(config.server.enable_cors);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_from_file_missing() {
        let result = AppConfig::from_file("/nonexistent/sentiscale.toml");
        assert!(matches!(result, Err(SentiscaleError::Io(_))));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(SentiscaleError::TomlParsing(_))));
    }
}
