use axum::Json;
use serde_json::{json, Value};

use crate::constants::SERVICE_NAME;

/// Health check endpoint
///
/// Used by load balancers and monitoring systems.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
