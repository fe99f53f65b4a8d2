//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};
use crate::error::AppError;

/// Pick the log filter with priority: CLI > RUST_LOG > default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(filter: &str, format: LogFormat) -> Result<(), AppError> {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
    .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_filter_wins() {
        let filter = resolve_filter(Some("portfolio=trace".into()), Some("warn".into()));
        assert_eq!(filter, "portfolio=trace");
    }

    #[test]
    fn test_env_filter_used_without_cli() {
        assert_eq!(resolve_filter(None, Some("info".into())), "info");
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(resolve_filter(None, None), DEFAULT_LOG_FILTER);
        assert_eq!(resolve_filter(None, Some(" ".into())), DEFAULT_LOG_FILTER);
    }
}
