//! swarm-hello: a greeting and health-check HTTP service.
//!
//! `GET /` answers with the serving host's name so replicas behind a load
//! balancer can be told apart, `GET /health` is a liveness probe, and
//! `GET /status` reports uptime and request counters.

pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
