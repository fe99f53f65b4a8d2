//! Root endpoint: a greeting plus the host and environment serving it.
//!
//! Both runtime values are looked up on every request. `APP_ENV` in particular
//! is never cached, so changing it is visible on the next request.

use std::ffi::OsString;

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::config::{
    APP_ENV_VAR, DEFAULT_APP_ENV, GREETING, HOSTNAME_ENV_VAR, UNKNOWN_HOSTNAME,
};

/// Body of `GET /`. Field order matches the serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub hostname: String,
    pub environment: String,
}

impl RootResponse {
    pub fn new(hostname: String, environment: String) -> Self {
        Self {
            message: GREETING,
            hostname,
            environment,
        }
    }

    /// Build the response from the current process state.
    pub fn current() -> Self {
        Self::new(current_hostname(), current_environment())
    }
}

/// Resolve the machine hostname, never returning an empty string.
///
/// Order: OS hostname call, then `$HOSTNAME`, then `"unknown"`.
pub fn current_hostname() -> String {
    resolve_hostname(
        hostname::get().ok(),
        std::env::var(HOSTNAME_ENV_VAR).ok(),
    )
}

fn resolve_hostname(os: Option<OsString>, env: Option<String>) -> String {
    os.and_then(|name| name.into_string().ok())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| {
            env.map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}

/// Read `APP_ENV`, defaulting to `"local"` when unset or not valid Unicode.
pub fn current_environment() -> String {
    environment_or_default(std::env::var(APP_ENV_VAR).ok())
}

fn environment_or_default(value: Option<String>) -> String {
    value.unwrap_or_else(|| DEFAULT_APP_ENV.to_string())
}

/// Root handler.
#[instrument(name = "root::index")]
pub async fn index() -> Json<RootResponse> {
    let response = RootResponse::current();
    tracing::debug!(
        hostname = %response.hostname,
        environment = %response.environment,
        "Built root response"
    );
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_order() {
        let response = RootResponse::new("web-1".to_string(), "staging".to_string());
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Hello from DevOps portfolio project!","hostname":"web-1","environment":"staging"}"#
        );
    }

    #[test]
    fn test_environment_defaults_to_local() {
        assert_eq!(environment_or_default(None), "local");
    }

    #[test]
    fn test_environment_kept_verbatim() {
        assert_eq!(environment_or_default(Some("production".into())), "production");
        // Set-but-empty is still "set"
        assert_eq!(environment_or_default(Some(String::new())), "");
    }

    #[test]
    fn test_hostname_prefers_os_value() {
        let name = resolve_hostname(Some("node-a".into()), Some("node-b".into()));
        assert_eq!(name, "node-a");
    }

    #[test]
    fn test_hostname_falls_back_to_env() {
        assert_eq!(resolve_hostname(None, Some("node-b".into())), "node-b");
        assert_eq!(resolve_hostname(Some("  ".into()), Some("node-b\n".into())), "node-b");
    }

    #[test]
    fn test_hostname_falls_back_to_unknown() {
        assert_eq!(resolve_hostname(None, None), "unknown");
        assert_eq!(resolve_hostname(Some("".into()), Some("".into())), "unknown");
    }

    #[test]
    fn test_current_hostname_is_stable_and_non_empty() {
        let first = current_hostname();
        assert!(!first.is_empty());
        assert_eq!(first, current_hostname());
    }
}
