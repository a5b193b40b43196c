//! Auth gateway CLI application.
//!
//! This is the main entry point for the auth-gate binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use auth_gate::config::LoggingConfig;
use auth_gate::utils::logging::init_logging;
use auth_gate::{Config, GatewayServer};

/// Auth gateway CLI
#[derive(Parser)]
#[command(name = "auth-gate")]
#[command(about = "An HTTP authentication gateway with remote token verification")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Start {
        /// HTTP bind address
        #[arg(long)]
        bind: Option<String>,

        /// HTTP port
        #[arg(long)]
        port: Option<u16>,

        /// Base URL of the authentication service
        #[arg(long)]
        auth_url: Option<String>,
    },

    /// Generate a default configuration file
    Config {
        /// Output file path
        #[arg(short, long, default_value = "auth-gate.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show gateway information
    Info,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Start {
            bind,
            port,
            auth_url,
        }) => {
            start_server(cli.config, cli.verbose, bind, port, auth_url).await?;
        }
        Some(Commands::Config { output, force }) => {
            init_logging(&LoggingConfig::default())?;
            generate_config(output, force)?;
        }
        Some(Commands::Validate { file }) => {
            init_logging(&LoggingConfig::default())?;
            validate_config(file)?;
        }
        Some(Commands::Info) => {
            init_logging(&LoggingConfig::default())?;
            show_info();
        }
        None => {
            start_server(cli.config, cli.verbose, None, None, None).await?;
        }
    }

    Ok(())
}

/// Start the gateway server
async fn start_server(
    config_path: Option<PathBuf>,
    verbose: bool,
    bind: Option<String>,
    port: Option<u16>,
    auth_url: Option<String>,
) -> anyhow::Result<()> {
    // Load configuration
    let mut config = if let Some(ref config_path) = config_path {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Override configuration with CLI arguments
    if let Some(bind) = bind {
        config.http.bind_address = bind;
    }

    if let Some(port) = port {
        config.http.port = port;
    }

    if let Some(auth_url) = auth_url {
        config.auth.server_url = auth_url;
    }

    if verbose {
        config.logging.level = "debug".to_string();
    }

    init_logging(&config.logging)?;

    if let Some(config_path) = config_path {
        info!("Loaded configuration from: {}", config_path.display());
    }

    let server = GatewayServer::new(config)?;

    info!("Gateway configuration:");
    info!("  Name: {}", server.config().server.name);
    info!(
        "  Listen: {}:{}",
        server.config().http.bind_address,
        server.config().http.port
    );
    info!("  Verifier: {}", server.config().auth.server_url);

    server.run().await?;

    Ok(())
}

/// Generate a default configuration file
fn generate_config(output: PathBuf, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        error!("Configuration file already exists: {}", output.display());
        error!("Use --force to overwrite");
        std::process::exit(1);
    }

    let config = Config::default();
    config.to_file(&output)?;

    info!("Generated configuration file: {}", output.display());
    Ok(())
}

/// Validate a configuration file
fn validate_config(file: PathBuf) -> anyhow::Result<()> {
    info!("Validating configuration file: {}", file.display());

    let config = Config::from_file(&file)?;
    config.validate()?;

    info!("Configuration file is valid");
    Ok(())
}

/// Show gateway information
fn show_info() {
    info!("Auth Gate");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
    info!("--------------------------------");
    info!("Features:");
    info!("  - Bearer token extraction from the Authorization header");
    info!("  - Remote token verification over HTTP");
    info!("  - Structured JSON rejection responses");
    info!("  - Configuration: TOML-based configuration management");
    info!("  - Logging: structured logging with multiple formats");
    info!("--------------------------------");
    info!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parsing() {
        // Test basic parsing
        let cli = Cli::try_parse_from(["auth-gate", "--verbose"]).unwrap();
        assert!(cli.verbose);

        // Test start command
        let cli = Cli::try_parse_from([
            "auth-gate",
            "start",
            "--port",
            "9090",
            "--auth-url",
            "http://auth:9000",
        ])
        .unwrap();

        if let Some(Commands::Start { port, auth_url, .. }) = cli.command {
            assert_eq!(port, Some(9090));
            assert_eq!(auth_url, Some("http://auth:9000".to_string()));
        } else {
            panic!("Expected Start command");
        }
    }

    #[test]
    fn test_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test-config.toml");

        // Generate config
        assert!(generate_config(config_path.clone(), false).is_ok());
        assert!(config_path.exists());

        // Validate generated config
        assert!(validate_config(config_path).is_ok());
    }
}
