//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_STATUS_UP;

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const fn up() -> Self {
        Self {
            status: HEALTH_STATUS_UP,
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
/// Downstream dependencies are not consulted.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_status_up() {
        let body = serde_json::to_string(&HealthResponse::up()).unwrap();
        assert_eq!(body, r#"{"status":"UP"}"#);
    }

    #[tokio::test]
    async fn handler_returns_up() {
        let Json(response) = health().await;
        assert_eq!(response, HealthResponse::up());
    }
}
