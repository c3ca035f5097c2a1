//! HTTP server module.
//!
//! Binds the listener and runs the router on plain HTTP. The server stops on
//! SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use axum_server::Handle;
pub use server::{serve, start_server, ServerError};
