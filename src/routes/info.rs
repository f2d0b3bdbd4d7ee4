//! Build-info endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::{
    APP_NAME, APP_VERSION, BUILD_TYPE, FEATURE_ACTUATOR, FEATURE_SBOM, FEATURE_TESTING,
};

/// Build descriptor. Fields serialize in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: &'static str,
    pub build_type: &'static str,
    pub features: Features,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Features {
    pub sbom: &'static str,
    pub actuator: &'static str,
    pub testing: &'static str,
}

impl InfoResponse {
    pub const fn current() -> Self {
        Self {
            app: APP_NAME,
            version: APP_VERSION,
            build_type: BUILD_TYPE,
            features: Features {
                sbom: FEATURE_SBOM,
                actuator: FEATURE_ACTUATOR,
                testing: FEATURE_TESTING,
            },
        }
    }
}

/// Returns the build descriptor.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::current())
}
