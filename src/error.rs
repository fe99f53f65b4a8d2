//! Process-level errors.
//!
//! Request handlers are total and never produce an error, so nothing here maps
//! to an HTTP response. These errors only surface from startup and the serve
//! loop, where `main` logs them and exits non-zero.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
