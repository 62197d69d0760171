//! CLI output formatting utilities

use crate::config::ClassifierConfig;
use crate::AppConfig;

/// Print a section header with an underline matching its width
pub fn print_header(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
    println!();
}

/// Hide all but the first four characters of a secret
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "***masked***".to_string()
    } else {
        format!("{visible}***")
    }
}

fn print_classifier(name: &str, classifier: &ClassifierConfig) {
    println!("🧠 {name} classifier:");
    println!("  Model: {}", classifier.model);
    println!("  Endpoint: {}", classifier.endpoint);
    println!(
        "  API key: {}",
        classifier
            .api_key
            .as_deref()
            .map_or_else(|| "not set".to_string(), mask_api_key)
    );
    println!("  Timeout: {}s", classifier.timeout_secs);
    println!();
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 sentiscale Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Bind address: {}", config.bind_address());
    println!("  CORS: {}", config.server.enable_cors);
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!();

    print_classifier("Arabic", &config.classifiers.arabic);
    print_classifier("English", &config.classifiers.english);
}
