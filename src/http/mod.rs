//! HTTP listener and process lifecycle.
//!
//! The server binds a plain TCP listener, serves the router through
//! `axum_server`, and drains in-flight requests on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
