use clap::Parser;
use sentiscale::cli::handle_analyze;
use sentiscale::cli::handle_config_command;
use sentiscale::cli::handle_serve_api;
use sentiscale::cli::Cli;
use sentiscale::cli::Commands;
use sentiscale::AppConfig;
use sentiscale::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    if cli.verbose {
        sentiscale::logging::init_logging_with_level("debug")?;
    } else {
        sentiscale::logging::init_logging_with_config(&config)?;
    }
    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Serve { host, port, cors } => {
            handle_serve_api(&config, host, port, cors).await?;
        }
        Commands::Analyze { text } => {
            handle_analyze(&config, &text).await?;
        }
        Commands::Config => {
            handle_config_command(&config)?;
        }
    }

    Ok(())
}
