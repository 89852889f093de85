//! Service info handlers: welcome payload and healthcheck.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Welcome response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting
    pub message: String,

    /// API version
    pub version: String,

    /// Interactive documentation path
    pub docs: String,
}

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Welcome handler
///
/// Points clients at the interactive docs.
#[endpoint(tags("health"), summary = "API welcome")]
pub(crate) async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Product Catalog API".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        docs: "/docs".to_owned(),
    })
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
