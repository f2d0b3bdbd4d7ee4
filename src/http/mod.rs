//! HTTP server module with optional TLS.
//!
//! Two listener modes:
//! - **None (default)**: Plain HTTP, for use behind a TLS-terminating proxy
//! - **Manual**: User-provided certificate and key files
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP (manual mode)

mod server;
mod shutdown;

pub use server::{start_server, start_server_with_handle, ServerError};
