use axum::Json;
use serde_json::{json, Value};

/// GET /healthz — process liveness.
///
/// Deliberately does not touch the database: a saturated pool must not
/// make the process look dead.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
