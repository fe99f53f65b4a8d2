//! Portfolio: a minimal greeting and health-check JSON service.
//!
//! `GET /` reports a greeting with the serving hostname and the `APP_ENV`
//! environment name; `GET /healthz` is a constant liveness probe.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
