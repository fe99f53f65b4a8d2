//! Portfolio service entry point.
//!
//! Parses command line arguments, loads the optional configuration file,
//! initializes tracing, builds the router and serves it until SIGTERM/Ctrl+C.

use std::path::PathBuf;

use clap::Parser;

use portfolio::config::{AppConfig, LogFormat};
use portfolio::{create_router, http, logging, AppError};

/// Portfolio: a greeting and health-check JSON service
#[derive(Parser, Debug)]
#[command(name = "portfolio", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides http.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "portfolio=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format (overrides logging.format)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Args {
    /// Load the config file (or defaults) and apply command line overrides.
    fn resolve_config(&self) -> Result<AppConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = args.resolve_config()?;

    // Priority: CLI > env > default
    let log_filter =
        logging::resolve_filter(args.log_level.clone(), std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, config.logging.format)?;

    let addr = config.listen_addr()?;
    tracing::info!(
        config = ?args.config,
        %addr,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    if let Err(e) = http::start_server(app, addr).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::try_parse_from(["portfolio"]).unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:8000");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 3000").unwrap();

        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "portfolio",
            "--config",
            path,
            "--port",
            "9000",
            "--log-format",
            "json",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        assert!(Args::try_parse_from(["portfolio", "--log-format", "yaml"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = Args::try_parse_from(["portfolio", "--config", "/nonexistent/portfolio.toml"])
            .unwrap();
        assert!(matches!(args.resolve_config(), Err(AppError::Config(_))));
    }
}
