//! demo-service: health and build-info HTTP endpoints.
//!
//! Serves `GET /api/health` and `GET /api/info` as JSON. The router is built by
//! [`routes::create_router`] and served by [`http::start_server`].

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::*;
